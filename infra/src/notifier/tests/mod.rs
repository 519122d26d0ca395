mod log_email_tests;
