mod non_null_type_tests;
