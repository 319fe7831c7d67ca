pub mod analysis_server;
