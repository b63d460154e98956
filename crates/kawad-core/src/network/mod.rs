mod client;
mod sheets;

pub use client::HttpClient;
pub use sheets::SheetsApi;
