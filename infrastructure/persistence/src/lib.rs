pub mod db;
pub mod cart_session {
    pub mod entity;
    pub mod repository;
}
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
