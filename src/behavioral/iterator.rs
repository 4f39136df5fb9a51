// Iterator: an explicit cursor over a library of books.

use std::io::Write;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

/// Aggregate role: anything that can hand out a cursor over its books.
pub trait BookCollection {
    fn iterator(&self) -> BookIterator<'_>;
}

/// Positional cursor over a fixed slice of books.
///
/// `has_next` is only a bounds check; `next` yields the book at the current
/// position and then advances.
pub struct BookIterator<'a> {
    books: &'a [Book],
    current_position: usize,
}

impl<'a> BookIterator<'a> {
    pub fn new(books: &'a [Book]) -> Self {
        Self {
            books,
            current_position: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_position < self.books.len()
    }
}

impl<'a> Iterator for BookIterator<'a> {
    type Item = &'a Book;

    fn next(&mut self) -> Option<Self::Item> {
        let book = self.books.get(self.current_position)?;
        self.current_position += 1;
        Some(book)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.books.len() - self.current_position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BookIterator<'_> {}

#[derive(Debug, Default)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl BookCollection for Library {
    fn iterator(&self) -> BookIterator<'_> {
        BookIterator::new(&self.books)
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Book;
    type IntoIter = BookIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iterator()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut library = Library::new();
    library.add_book(Book::new("The Catcher in the Rye", "J.D. Salinger"));
    library.add_book(Book::new("To Kill a Mockingbird", "Harper Lee"));
    library.add_book(Book::new("1984", "George Orwell"));

    let mut iterator = library.iterator();

    while iterator.has_next() {
        if let Some(book) = iterator.next() {
            writeln!(out, "Book: {} by {}", book.title, book.author)?;
        }
    }
    Ok(())
}
