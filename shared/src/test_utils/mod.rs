pub mod lambda_fixtures;
pub mod test_logging;
