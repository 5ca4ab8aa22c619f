// Tests for uncertainty calculations

mod linalg_crosscheck_tests;
