//! The interactive numbered menu.
//!
//! Everything here is thin I/O over [`Repository`]: prompt, call one
//! operation, render the result. Validation rejections print their message
//! and return to the menu; numeric and rating prompts re-ask until the
//! input parses.

use biblio_catalog::{BookListing, Repository};
use std::io::{self, BufRead, Write};

/// Run the menu loop until the user exits (or stdin closes).
pub async fn main_menu(repo: &Repository) -> io::Result<()> {
    loop {
        print_menu();
        let choice = match prompt("Enter your choice: ") {
            Ok(choice) => choice,
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err),
        };
        match choice.as_str() {
            "1" => add_book(repo).await?,
            "2" => add_author(repo).await?,
            "3" => add_category(repo).await?,
            "4" => add_review(repo).await?,
            "5" => update_book(repo).await?,
            "6" => delete_review(repo).await?,
            "7" => delete_book(repo).await?,
            "8" => search_by_author(repo).await?,
            "9" => search_by_category(repo).await?,
            "10" => view_all_books(repo).await?,
            "11" => view_categories(repo).await?,
            "12" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
    Ok(())
}

fn print_menu() {
    println!();
    println!("Library Management System");
    println!(" 1. Add Book");
    println!(" 2. Add Author");
    println!(" 3. Add Category");
    println!(" 4. Add Review");
    println!(" 5. Update Book");
    println!(" 6. Delete Review");
    println!(" 7. Delete Book");
    println!(" 8. Search Books by Author");
    println!(" 9. Search Books by Category");
    println!("10. View All Books");
    println!("11. View Categories");
    println!("12. Exit");
}

// =========================================================================
// Commands
// =========================================================================

async fn add_book(repo: &Repository) -> io::Result<()> {
    let title = title_case(&prompt("Enter the book title: ")?);
    let author = title_case(&prompt("Enter the author's name: ")?);
    let Some(category_id) = prompt_category_id(repo).await? else {
        println!("Error: no categories exist yet. Add a category first.");
        return Ok(());
    };
    match repo.add_book(&title, &author, category_id).await {
        Ok(id) => println!("Book added: ID {id}, '{title}' by {author}."),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

async fn add_author(repo: &Repository) -> io::Result<()> {
    let name = title_case(&prompt("Enter the author's name: ")?);
    match repo.add_author(&name).await {
        Ok(id) => println!("Author added: ID {id}, {name}."),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

async fn add_category(repo: &Repository) -> io::Result<()> {
    loop {
        let name = title_case(&prompt("Enter the category name: ")?);
        match repo.insert_category(&name).await {
            Ok(id) => {
                println!("Category '{name}' added with ID: {id}");
                return Ok(());
            },
            // Duplicates re-prompt; a storage failure won't get better.
            Err(err) if err.is_validation() => println!("Error: {err}"),
            Err(err) => {
                println!("Error: {err}");
                return Ok(());
            },
        }
    }
}

async fn add_review(repo: &Repository) -> io::Result<()> {
    let book_id: i64 = prompt_parse("Enter the book ID: ")?;
    match repo.get_book(book_id).await {
        Ok(Some(_)) => (),
        Ok(None) => {
            println!("Error: no book found with ID {book_id}.");
            return Ok(());
        },
        Err(err) => {
            println!("Error: {err}");
            return Ok(());
        },
    }
    let user_id: i64 = prompt_parse("Enter the user ID: ")?;
    let rating = prompt_rating()?;
    let body = prompt("Enter the review text: ")?;
    match repo.add_review(book_id, user_id, rating, &body).await {
        Ok(_) => println!("Review added."),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

async fn update_book(repo: &Repository) -> io::Result<()> {
    let title = title_case(&prompt("Enter the book name: ")?);
    let rows = match repo.get_all_books(None).await {
        Ok(rows) => rows,
        Err(err) => {
            println!("Error: {err}");
            return Ok(());
        },
    };
    // The listing fans out per review; keep one row per book.
    let mut candidates: Vec<&BookListing> = Vec::new();
    for row in &rows {
        if row.title == title && !candidates.iter().any(|c| c.book_id == row.book_id) {
            candidates.push(row);
        }
    }
    if candidates.is_empty() {
        println!("Error: no book found with the name '{title}'.");
        return Ok(());
    }

    let mut selected = None;
    for row in candidates {
        println!("Book ID:  {}", row.book_id);
        println!("Title:    {}", row.title);
        println!("Author:   {}", row.author.as_deref().unwrap_or("N/A"));
        println!("Category: {}", row.category.as_deref().unwrap_or("N/A"));
        if confirm("Is this the correct book? (y/n): ")? {
            selected = Some(row.book_id);
            break;
        }
    }
    let Some(book_id) = selected else {
        println!("No book selected.");
        return Ok(());
    };

    let new_title = title_case(&prompt("Enter a new title: ")?);
    let new_author = title_case(&prompt("Enter a new author name: ")?);
    let Some(new_category) = prompt_category_id(repo).await? else {
        println!("Error: no categories exist yet. Add a category first.");
        return Ok(());
    };

    let result = async {
        repo.update_book_title(book_id, &new_title).await?;
        repo.update_book_author(book_id, &new_author).await?;
        repo.update_book_category(book_id, new_category).await
    }
    .await;
    match result {
        Ok(_) => println!("Book details updated."),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

async fn delete_review(repo: &Repository) -> io::Result<()> {
    let review_id: i64 = prompt_parse("Enter the review ID: ")?;
    let review = match repo.get_review_by_id(review_id).await {
        Ok(Some(review)) => review,
        Ok(None) => {
            println!("Error: review with ID {review_id} does not exist.");
            return Ok(());
        },
        Err(err) => {
            println!("Error: {err}");
            return Ok(());
        },
    };
    println!("Review ID: {}", review.id);
    println!("Book ID:   {}", review.book_id);
    println!("User ID:   {}", review.user_id);
    println!("Rating:    {}", review.rating);
    println!("Text:      {}", review.body);
    if confirm("Do you want to delete this review? (y/n): ")? {
        match repo.delete_review(review_id).await {
            Ok(_) => println!("Review deleted."),
            Err(err) => println!("Error: {err}"),
        }
    } else {
        println!("Review not deleted.");
    }
    Ok(())
}

async fn delete_book(repo: &Repository) -> io::Result<()> {
    view_books_with_ids(repo).await;
    let book_id: i64 = prompt_parse("Enter the book ID to delete: ")?;
    match repo.delete_book(book_id).await {
        Ok(true) => println!("Book deleted."),
        Ok(false) => println!("Error: no book found with ID {book_id}."),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

async fn search_by_author(repo: &Repository) -> io::Result<()> {
    let name = title_case(&prompt("Enter the author's name: ")?);
    match repo.get_books_by_author(&name).await {
        Ok(books) if books.is_empty() => println!("No books found for '{name}'."),
        Ok(books) => {
            for book in books {
                println!("Book ID: {}, Title: {}", book.id, book.title);
            }
        },
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

async fn search_by_category(repo: &Repository) -> io::Result<()> {
    view_categories(repo).await?;
    let Some(category_id) = prompt_category_id(repo).await? else {
        return Ok(());
    };
    let category_name = match repo.get_category(category_id).await {
        Ok(Some(category)) => category.name,
        _ => "N/A".to_string(),
    };
    match repo.get_all_books(Some(category_id)).await {
        Ok(rows) if rows.is_empty() => println!("No books found in '{category_name}'."),
        Ok(rows) => {
            println!("Books in '{category_name}':");
            println!("{:<4}{:<40}{:<20}{:<8}{:<40}", "ID", "Book", "Author", "Rating", "Review");
            println!("{}", "=".repeat(112));
            for row in rows {
                println!(
                    "{:<4}{:<40}{:<20}{:<8}{:<40}",
                    row.book_id,
                    clip(&row.title, 38),
                    clip(row.author.as_deref().unwrap_or("N/A"), 18),
                    rating_cell(row.rating),
                    clip(row.review.as_deref().unwrap_or("N/A"), 38),
                );
            }
            println!("{}", "=".repeat(112));
        },
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

async fn view_all_books(repo: &Repository) -> io::Result<()> {
    match repo.get_all_books(None).await {
        Ok(rows) if rows.is_empty() => println!("No books found."),
        Ok(rows) => {
            println!("All Books:");
            println!(
                "{:<4}{:<40}{:<20}{:<15}{:<8}{:<40}",
                "ID", "Book", "Author", "Category", "Rating", "Review"
            );
            println!("{}", "=".repeat(127));
            for row in rows {
                println!(
                    "{:<4}{:<40}{:<20}{:<15}{:<8}{:<40}",
                    row.book_id,
                    clip(&row.title, 38),
                    clip(row.author.as_deref().unwrap_or("N/A"), 18),
                    clip(row.category.as_deref().unwrap_or("N/A"), 13),
                    rating_cell(row.rating),
                    clip(row.review.as_deref().unwrap_or("N/A"), 38),
                );
            }
            println!("{}", "=".repeat(127));
        },
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

async fn view_categories(repo: &Repository) -> io::Result<()> {
    match repo.get_categories().await {
        Ok(categories) if categories.is_empty() => println!("No categories found."),
        Ok(categories) => {
            println!("Categories:");
            for category in categories {
                println!("ID: {}, Category: {}", category.id, category.name);
            }
        },
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

/// Compact id/title listing shown before deletion.
async fn view_books_with_ids(repo: &Repository) {
    let Ok(rows) = repo.get_all_books(None).await else {
        return;
    };
    let mut seen = Vec::new();
    println!("Books:");
    for row in rows {
        if !seen.contains(&row.book_id) {
            println!("{:<4}{:<40}", row.book_id, clip(&row.title, 38));
            seen.push(row.book_id);
        }
    }
}

// =========================================================================
// Prompt helpers
// =========================================================================

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

fn prompt_parse<T: std::str::FromStr>(label: &str) -> io::Result<T> {
    loop {
        match prompt(label)?.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Error: please enter a valid number."),
        }
    }
}

fn prompt_rating() -> io::Result<f64> {
    loop {
        let rating: f64 = prompt_parse("Enter the rating (0-5): ")?;
        if (0.0..=5.0).contains(&rating) {
            return Ok(rating);
        }
        println!("Error: rating should be between 0 and 5.");
    }
}

/// Loop until an existing category id is entered.
///
/// Returns `None` when there is nothing to pick from (no categories yet, or
/// the lookup failed), so callers can bail out instead of trapping the user.
async fn prompt_category_id(repo: &Repository) -> io::Result<Option<i64>> {
    match repo.get_categories().await {
        Ok(categories) if categories.is_empty() => return Ok(None),
        Ok(_) => (),
        Err(err) => {
            println!("Error: {err}");
            return Ok(None);
        },
    }
    loop {
        let category_id: i64 = prompt_parse("Enter the category ID: ")?;
        match repo.get_category(category_id).await {
            Ok(Some(_)) => return Ok(Some(category_id)),
            Ok(None) => println!("Error: invalid category ID. Please try again."),
            Err(err) => println!("Error: {err}"),
        }
    }
}

fn confirm(label: &str) -> io::Result<bool> {
    loop {
        match prompt(label)?.to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => println!("Invalid input. Please enter 'y' or 'n'."),
        }
    }
}

// =========================================================================
// Rendering helpers
// =========================================================================

/// Capitalize the first letter of each word, lowercasing the rest.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Truncate to a column width, marking the cut with an ellipsis.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn rating_cell(rating: Option<f64>) -> String {
    match rating {
        Some(rating) => format!("{rating:.1}"),
        None => "N/A".to_string(),
    }
}
