mod mock_store;
mod object_staging_store;

pub use mock_store::MockStagingStore;
pub use object_staging_store::ObjectStagingStore;
