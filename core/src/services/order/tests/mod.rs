mod draft_tests;
