// Handlers are split by resource: /api/users/* and /api/complaints/*.
pub mod complaints;
pub mod users;
