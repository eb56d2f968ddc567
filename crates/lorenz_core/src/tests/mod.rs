mod dopri5_tests;
mod lib_tests;
