mod object_storage_supabase;

pub use object_storage_supabase::SupabaseObjectStorage;
