mod graphql_type_diff_tests;
mod utils;
