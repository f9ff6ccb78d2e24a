pub mod console_session {
    pub mod entity;
    pub mod repository;
}
