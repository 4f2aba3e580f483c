// Adapters layer: concrete clients for the remote card store.

pub mod supabase;

pub use supabase::SupabaseClient;
