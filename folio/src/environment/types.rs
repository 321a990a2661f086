use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_persistence_memory::contact::MemoryContactRepository;
use folio_shared_impl::time::TimeServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<ContactFeature>;

// Shared
pub type Time = TimeServiceImpl;

// Persistence
pub type ContactRepo = MemoryContactRepository<Time>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<ContactRepo>;
