mod books;
pub use books::Books;

mod create_book;
pub use create_book::CreateBook;

mod create_entity;
pub use create_entity::CreateEntity;
