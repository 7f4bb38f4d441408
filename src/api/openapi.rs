//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, borrowers, copies, genres, health, loans, summary};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Local Library API",
        version = "0.1.0",
        description = "Library catalog and lending management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Summary
        summary::get_summary,
        // Genres
        genres::list_genres,
        genres::get_genre,
        genres::create_genre,
        genres::update_genre,
        genres::delete_genre,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Copies
        copies::list_copies,
        copies::get_copy,
        copies::create_copy,
        copies::update_copy,
        copies::delete_copy,
        // Borrowers
        borrowers::list_borrowers,
        borrowers::get_borrower,
        borrowers::create_borrower,
        borrowers::delete_borrower,
        // Loans
        loans::get_renewal_proposal,
        loans::renew_copy,
        loans::get_borrower_loans,
    ),
    components(
        schemas(
            // Genres
            crate::models::genre::Genre,
            crate::models::genre::CreateGenre,
            crate::models::genre::UpdateGenre,
            // Authors
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            crate::models::author::UpdateAuthor,
            // Books
            crate::models::book::Book,
            crate::models::book::BookDetails,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Copies
            crate::models::copy::BookCopy,
            crate::models::copy::CreateCopy,
            crate::models::copy::UpdateCopy,
            crate::models::copy::BorrowedCopy,
            crate::models::copy::LoanStatus,
            // Borrowers
            crate::models::borrower::Borrower,
            crate::models::borrower::CreateBorrower,
            // Loans
            loans::RenewRequest,
            loans::RenewalProposal,
            loans::RenewResponse,
            // Summary
            crate::services::catalog::CatalogSummary,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "summary", description = "Catalog summary counts"),
        (name = "genres", description = "Genre management"),
        (name = "authors", description = "Author management"),
        (name = "books", description = "Book management"),
        (name = "copies", description = "Book copy management"),
        (name = "borrowers", description = "Borrower management"),
        (name = "loans", description = "Loan renewal workflow")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
