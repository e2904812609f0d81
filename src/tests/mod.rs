mod app;
mod filter;
