use crate::model::{Author, Book, Publisher};

pub(super) fn publishers() -> Vec<Publisher> {
    vec![Publisher::new(1, "Pragma"), Publisher::new(2, "Melvil")]
}

pub(super) fn authors() -> Vec<Author> {
    vec![
        Author::new(1, "J. K. Rowling"),
        Author::new(2, "J. R. R. Tolkien"),
        Author::new(3, "Brent Weeks"),
    ]
}

pub(super) fn books() -> Vec<Book> {
    [
        (1, "Harry Potter and the Chamber of Secrets", 1, 1),
        (2, "Harry Potter and the Prisoner of Azkaban", 1, 1),
        (3, "Harry Potter and the Goblet of Fire", 1, 2),
        (4, "The Fellowship of the Ring", 2, 1),
        (5, "The Two Towers", 2, 2),
        (6, "The Return of the King", 2, 2),
        (7, "The Way of Shadows", 3, 2),
        (8, "Beyond the Shadows", 3, 1),
    ]
    .into_iter()
    .map(|(id, name, author_id, publisher_id)| {
        Book::new(id, name, author_id).with_publisher(Some(publisher_id))
    })
    .collect()
}
