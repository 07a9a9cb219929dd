// Testes de integração do fluxo de comissão e da resolução de
// empreendimentos. Exigem um Postgres acessível via DATABASE_URL e por
// isso ficam atrás de #[ignore]:
//
//   DATABASE_URL=postgres://... cargo test -- --ignored

use rust_decimal::Decimal;
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use imobcrm_backend::{
    db::{
        agent_repo::NewAgent, AgentRepository, AuditRepository, CatalogRepository,
        FinanceRepository,
    },
    models::finance::{RecordStatus, RecordType},
    services::{
        finance_service::{CreateRecordInput, UpdateRecordInput},
        AuditService, CatalogService, FinanceService,
    },
};

async fn setup_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL deve apontar para o Postgres de teste");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("falha ao conectar no Postgres de teste");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("falha ao rodar as migrações");

    pool
}

fn finance_service(pool: &PgPool) -> FinanceService {
    FinanceService::new(
        FinanceRepository::new(pool.clone()),
        AgentRepository::new(pool.clone()),
        AuditService::new(AuditRepository::new(pool.clone())),
    )
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

#[tokio::test]
#[ignore]
async fn resolucao_de_empreendimento_por_nome_e_idempotente() {
    let pool = setup_pool().await;
    let catalog = CatalogService::new(CatalogRepository::new(pool.clone()));
    let org = Uuid::new_v4();

    let developer = catalog
        .create_developer(org, "Construtora Horizonte", None, None, None)
        .await
        .unwrap();

    // Primeira menção pelo nome materializa a linha no catálogo.
    let first = catalog
        .resolve_project_id(org, developer.id, "Residencial Aurora")
        .await
        .unwrap();

    // A segunda resolução do mesmo nome reaproveita o id existente.
    let second = catalog
        .resolve_project_id(org, developer.id, "Residencial Aurora")
        .await
        .unwrap();
    assert_eq!(first, second);

    let projects = catalog.list_projects(org).await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Residencial Aurora");

    // Referência em forma de UUID passa direto, sem consulta nem inserção.
    let passthrough = catalog
        .resolve_project_id(org, developer.id, &first.to_string())
        .await
        .unwrap();
    assert_eq!(passthrough, first);
    assert_eq!(catalog.list_projects(org).await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore]
async fn mesmo_nome_em_construtoras_diferentes_gera_ids_distintos() {
    let pool = setup_pool().await;
    let catalog = CatalogService::new(CatalogRepository::new(pool.clone()));
    let org = Uuid::new_v4();

    let a = catalog
        .create_developer(org, "Construtora A", None, None, None)
        .await
        .unwrap();
    let b = catalog
        .create_developer(org, "Construtora B", None, None, None)
        .await
        .unwrap();

    let in_a = catalog
        .resolve_project_id(org, a.id, "Torre Norte")
        .await
        .unwrap();
    let in_b = catalog
        .resolve_project_id(org, b.id, "Torre Norte")
        .await
        .unwrap();

    // O escopo da busca é (organização, construtora, nome).
    assert_ne!(in_a, in_b);
}

#[tokio::test]
#[ignore]
async fn ciclo_pendente_pago_pendente_volta_o_ledger_a_zero() {
    let pool = setup_pool().await;
    let finance = finance_service(&pool);
    let agents = AgentRepository::new(pool.clone());
    let org = Uuid::new_v4();

    let agent = agents
        .create_agent(
            org,
            NewAgent {
                full_name: "Ana Beatriz Souza",
                email: None,
                phone: None,
                creci: Some("CRECI-SP 123456-F"),
            },
        )
        .await
        .unwrap();
    assert_eq!(agent.total_commission_paid, Decimal::ZERO);

    // Lançamento de comissão de 500, criado pendente: não mexe no ledger.
    let record = finance
        .create_record(
            org,
            None,
            CreateRecordInput {
                record_type: RecordType::Expense,
                description: "Comissão venda Apto 104".to_string(),
                amount: dec("500.00"),
                status: RecordStatus::Pending,
                category: "Comissão".to_string(),
                related_entity_id: Some(agent.id),
                sale_id: None,
                due_date: None,
            },
        )
        .await
        .unwrap();

    let agent = agents.get_agent(org, agent.id).await.unwrap().unwrap();
    assert_eq!(agent.total_commission_paid, Decimal::ZERO);

    // Pendente -> pago credita o valor do registro.
    finance
        .update_record(
            org,
            None,
            record.id,
            UpdateRecordInput {
                record_type: None,
                description: None,
                amount: None,
                status: Some(RecordStatus::Paid),
                category: None,
                related_entity_id: None,
                due_date: None,
            },
        )
        .await
        .unwrap();

    let agent = agents.get_agent(org, agent.id).await.unwrap().unwrap();
    assert_eq!(agent.total_commission_paid, dec("500.00"));

    // Pago -> pendente estorna o valor anterior e o total volta a zero.
    finance
        .update_record(
            org,
            None,
            record.id,
            UpdateRecordInput {
                record_type: None,
                description: None,
                amount: None,
                status: Some(RecordStatus::Pending),
                category: None,
                related_entity_id: None,
                due_date: None,
            },
        )
        .await
        .unwrap();

    let agent = agents.get_agent(org, agent.id).await.unwrap().unwrap();
    assert_eq!(agent.total_commission_paid, Decimal::ZERO);
}

#[tokio::test]
#[ignore]
async fn pagar_registro_que_nao_e_comissao_nao_mexe_no_ledger() {
    let pool = setup_pool().await;
    let finance = finance_service(&pool);
    let agents = AgentRepository::new(pool.clone());
    let org = Uuid::new_v4();

    let agent = agents
        .create_agent(
            org,
            NewAgent {
                full_name: "Paula Mendes",
                email: None,
                phone: None,
                creci: None,
            },
        )
        .await
        .unwrap();

    // Registro de Marketing vinculado ao corretor (reembolso, por exemplo):
    // o vínculo sozinho não faz dele uma comissão.
    let record = finance
        .create_record(
            org,
            None,
            CreateRecordInput {
                record_type: RecordType::Expense,
                description: "Reembolso de anúncio".to_string(),
                amount: dec("300.00"),
                status: RecordStatus::Pending,
                category: "Marketing".to_string(),
                related_entity_id: Some(agent.id),
                sale_id: None,
                due_date: None,
            },
        )
        .await
        .unwrap();

    finance
        .update_record(
            org,
            None,
            record.id,
            UpdateRecordInput {
                record_type: None,
                description: None,
                amount: None,
                status: Some(RecordStatus::Paid),
                category: None,
                related_entity_id: None,
                due_date: None,
            },
        )
        .await
        .unwrap();

    let agent = agents.get_agent(org, agent.id).await.unwrap().unwrap();
    assert_eq!(agent.total_commission_paid, Decimal::ZERO);
}

#[tokio::test]
#[ignore]
async fn recategorizar_ao_despagar_ainda_estorna_o_ledger() {
    let pool = setup_pool().await;
    let finance = finance_service(&pool);
    let agents = AgentRepository::new(pool.clone());
    let org = Uuid::new_v4();

    let agent = agents
        .create_agent(
            org,
            NewAgent {
                full_name: "Rafael Torres",
                email: None,
                phone: None,
                creci: None,
            },
        )
        .await
        .unwrap();

    let record = finance
        .create_record(
            org,
            None,
            CreateRecordInput {
                record_type: RecordType::Expense,
                description: "Comissão venda Casa 12".to_string(),
                amount: dec("800.00"),
                status: RecordStatus::Paid,
                category: "Comissão".to_string(),
                related_entity_id: Some(agent.id),
                sale_id: None,
                due_date: None,
            },
        )
        .await
        .unwrap();

    let agent_after_pay = agents.get_agent(org, agent.id).await.unwrap().unwrap();
    assert_eq!(agent_after_pay.total_commission_paid, dec("800.00"));

    // Um único update que despaga E troca a categoria: o estorno segue o
    // registro anterior (que foi o creditado), então o ledger volta a zero.
    finance
        .update_record(
            org,
            None,
            record.id,
            UpdateRecordInput {
                record_type: None,
                description: None,
                amount: None,
                status: Some(RecordStatus::Pending),
                category: Some("Marketing".to_string()),
                related_entity_id: None,
                due_date: None,
            },
        )
        .await
        .unwrap();

    let agent = agents.get_agent(org, agent.id).await.unwrap().unwrap();
    assert_eq!(agent.total_commission_paid, Decimal::ZERO);
}

#[tokio::test]
#[ignore]
async fn comissao_criada_ja_paga_credita_o_ledger_na_criacao() {
    let pool = setup_pool().await;
    let finance = finance_service(&pool);
    let agents = AgentRepository::new(pool.clone());
    let org = Uuid::new_v4();

    let agent = agents
        .create_agent(
            org,
            NewAgent {
                full_name: "Carlos Lima",
                email: None,
                phone: None,
                creci: None,
            },
        )
        .await
        .unwrap();

    finance
        .create_record(
            org,
            None,
            CreateRecordInput {
                record_type: RecordType::Expense,
                description: "Comissão paga à vista".to_string(),
                amount: dec("1200.00"),
                status: RecordStatus::Paid,
                category: "Comissão".to_string(),
                related_entity_id: Some(agent.id),
                sale_id: None,
                due_date: None,
            },
        )
        .await
        .unwrap();

    let agent = agents.get_agent(org, agent.id).await.unwrap().unwrap();
    assert_eq!(agent.total_commission_paid, dec("1200.00"));
}

#[tokio::test]
#[ignore]
async fn categoria_normalizada_e_devolvida_pelo_nome() {
    let pool = setup_pool().await;
    let finance = finance_service(&pool);
    let org = Uuid::new_v4();

    let category = finance
        .create_category(org, "Marketing", RecordType::Expense)
        .await
        .unwrap();

    let record = finance
        .create_record(
            org,
            None,
            CreateRecordInput {
                record_type: RecordType::Expense,
                description: "Impulsionamento de anúncio".to_string(),
                amount: dec("350.00"),
                status: RecordStatus::Pending,
                category: "Marketing".to_string(),
                related_entity_id: None,
                sale_id: None,
                due_date: None,
            },
        )
        .await
        .unwrap();

    // O chamador nunca vê o id interno da categoria.
    assert_eq!(record.category, "Marketing");

    // Mas o banco guarda a forma normalizada.
    let stored: String =
        sqlx::query_scalar("SELECT category FROM financial_records WHERE id = $1")
            .bind(record.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, category.id.to_string());

    // E a listagem devolve o nome de exibição.
    let listed = finance.list_records(org).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].category, "Marketing");
}
