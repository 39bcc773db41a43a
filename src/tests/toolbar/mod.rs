mod prefs_tests;
mod stack_tests;
