//! Controller tests driven through the in-memory page.

mod handler_tests;
