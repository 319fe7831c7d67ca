pub mod issue_fetcher;
