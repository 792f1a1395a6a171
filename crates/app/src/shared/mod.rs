pub mod config;
pub mod export;
pub mod state;
pub mod supabase;
