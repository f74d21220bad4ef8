mod daijisen_tests;
