use sqlx::postgres::PgPoolOptions;
use std::env;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use finance_tracker::generator::{SystemClock, UuidV4Generator};
use finance_tracker::handlers::ErrorResponse;
use finance_tracker::models::analysis::{
    MonthComparison, OverspendingCategory, SavingsRecommendation, SpendingAnalysis,
};
use finance_tracker::models::category::Category;
use finance_tracker::models::expense::{CreateExpenseRequest, Expense};
use finance_tracker::models::income::{CreateIncomeRequest, Income};
use finance_tracker::models::user::{CreateUserRequest, UpdateUserRequest, User};
use finance_tracker::repositories::{
    PostgresCategoryRepository, PostgresExpenseRepository, PostgresIncomeRepository,
    PostgresUserRepository,
};
use finance_tracker::routes::api_router;
use finance_tracker::services::{
    AnalysisServiceImpl, CategoryService, CategoryServiceImpl, ExpenseServiceImpl,
    IncomeServiceImpl, RecommendationServiceImpl, UserServiceImpl,
};
use finance_tracker::state::AppState;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        finance_tracker::handlers::category_handlers::list_categories_handler,
        finance_tracker::handlers::user_handlers::create_user_handler,
        finance_tracker::handlers::user_handlers::get_user_handler,
        finance_tracker::handlers::user_handlers::update_user_handler,
        finance_tracker::handlers::income_handlers::add_income_handler,
        finance_tracker::handlers::income_handlers::list_income_handler,
        finance_tracker::handlers::expense_handlers::add_expense_handler,
        finance_tracker::handlers::expense_handlers::list_expenses_handler,
        finance_tracker::handlers::expense_handlers::delete_expense_handler,
        finance_tracker::handlers::analysis_handlers::get_analysis_handler,
        finance_tracker::handlers::analysis_handlers::get_recommendations_handler,
    ),
    components(
        schemas(
            Category, User, CreateUserRequest, UpdateUserRequest,
            Income, CreateIncomeRequest, Expense, CreateExpenseRequest,
            SpendingAnalysis, OverspendingCategory, MonthComparison,
            SavingsRecommendation, ErrorResponse,
        )
    ),
    tags(
        (name = "categories", description = "Spending category directory"),
        (name = "users", description = "User accounts and budgets"),
        (name = "income", description = "Income records"),
        (name = "expenses", description = "Expense records"),
        (name = "analysis", description = "Spending analysis and savings recommendations")
    ),
    info(
        title = "Finance Tracker API",
        version = "0.1.0",
        description = "REST API for tracking personal income, expenses, and monthly budgets",
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get configuration from environment
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("connected to database");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("migrations completed");

    // Initialize repositories
    let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
    let category_repository = Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let income_repository = Arc::new(PostgresIncomeRepository::new(pool.clone()));
    let expense_repository = Arc::new(PostgresExpenseRepository::new(pool.clone()));

    let id_generator = Arc::new(UuidV4Generator);
    let clock = Arc::new(SystemClock);

    // Initialize services
    let user_service = Arc::new(UserServiceImpl::new(
        user_repository.clone(),
        id_generator.clone(),
        clock.clone(),
    ));
    let category_service = Arc::new(CategoryServiceImpl::new(
        category_repository.clone(),
        id_generator.clone(),
    ));
    let income_service = Arc::new(IncomeServiceImpl::new(
        income_repository.clone(),
        id_generator.clone(),
    ));
    let expense_service = Arc::new(ExpenseServiceImpl::new(
        expense_repository.clone(),
        id_generator,
    ));
    let analysis_service = Arc::new(AnalysisServiceImpl::new(
        user_repository,
        category_repository,
        income_repository,
        expense_repository,
        clock,
    ));
    let recommendation_service = Arc::new(RecommendationServiceImpl::new(
        analysis_service.clone(),
    ));

    // Seed the category directory; a populated directory is left untouched
    category_service.seed_defaults().await?;
    tracing::info!("category directory ready");

    let state = AppState {
        user_service,
        category_service,
        income_service,
        expense_service,
        analysis_service,
        recommendation_service,
    };

    // Build router with routes
    let app = api_router(state)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
