pub mod collaborator;
pub mod remote;
pub mod ticket_service;
