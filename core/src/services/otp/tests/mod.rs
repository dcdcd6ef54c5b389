mod service_tests;
mod store_tests;
