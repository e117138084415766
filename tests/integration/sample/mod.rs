mod exec_test;
mod test_utils;
