mod record_store_supabase;

pub use record_store_supabase::SupabaseRecordStore;
