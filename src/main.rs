//src/main.rs

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use imobcrm_backend::config::AppState;
use imobcrm_backend::docs::ApiDoc;
use imobcrm_backend::handlers;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let agent_routes = Router::new()
        .route("/"
               ,post(handlers::agents::create_agent)
               .get(handlers::agents::list_agents)
        )
        .route("/{id}"
               ,get(handlers::agents::get_agent)
               .put(handlers::agents::update_agent)
               .delete(handlers::agents::delete_agent)
        );

    let catalog_routes = Router::new()
        .route("/developers"
               ,post(handlers::catalog::create_developer)
               .get(handlers::catalog::list_developers)
        )
        .route("/projects"
               ,get(handlers::catalog::list_projects)
        );

    let crm_routes = Router::new()
        .route("/clients"
               ,post(handlers::crm::create_client)
               .get(handlers::crm::list_clients)
        )
        .route("/leads"
               ,post(handlers::crm::create_lead)
               .get(handlers::crm::list_leads)
        )
        .route("/leads/{id}"
               ,put(handlers::crm::update_lead)
               .delete(handlers::crm::delete_lead)
        )
        .route("/deals"
               ,post(handlers::crm::create_deal)
               .get(handlers::crm::list_deals)
        )
        .route("/deals/{id}"
               ,put(handlers::crm::update_deal)
               .delete(handlers::crm::delete_deal)
        );

    let sales_routes = Router::new()
        .route("/"
               ,post(handlers::sales::create_sale)
               .get(handlers::sales::list_sales)
        )
        .route("/{id}"
               ,get(handlers::sales::get_sale)
               .put(handlers::sales::update_sale)
               .delete(handlers::sales::delete_sale)
        );

    let finance_routes = Router::new()
        .route("/categories"
               ,post(handlers::finance::create_category)
               .get(handlers::finance::list_categories)
        )
        .route("/records"
               ,post(handlers::finance::create_record)
               .get(handlers::finance::list_records)
        )
        .route("/records/{id}"
               ,put(handlers::finance::update_record)
               .delete(handlers::finance::delete_record)
        );

    let settings_routes = Router::new()
        .route("/"
               ,get(handlers::settings::get_settings)
               .put(handlers::settings::update_settings)
        );

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/agents", agent_routes)
        .nest("/api/catalog", catalog_routes)
        .nest("/api/crm", crm_routes)
        .nest("/api/sales", sales_routes)
        .nest("/api/finance", finance_routes)
        .nest("/api/settings", settings_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
