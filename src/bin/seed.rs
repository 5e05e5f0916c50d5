//! Seeds a hosted backend project with a demo account and a few recipes.
//!
//! The service-role secret bypasses row-level security, so it is read only
//! from the environment and never belongs in the config file:
//!
//! ```text
//! LADLE_BACKEND_URL=... LADLE_SERVICE_ROLE_KEY=... cargo run --bin seed
//! ```

use ladle_bridge::profile::ProfileUpsert;
use ladle_bridge::recipe::{Category, Difficulty, Recipe, RecipePayload};
use ladle_client::{BackendClient, ClientError, jwt_role};

fn main() {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    let url = std::env::var("LADLE_BACKEND_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:54321".to_owned());
    let service_key = std::env::var("LADLE_SERVICE_ROLE_KEY")
        .expect("LADLE_SERVICE_ROLE_KEY must be set to the project's service-role secret");

    let role = jwt_role(&service_key);
    if role.as_deref() != Some("service_role") {
        log::error!(
            "LADLE_SERVICE_ROLE_KEY is not a service-role key (role detected: {role:?}). \
             Copy the service-role secret, not the public key."
        );
        std::process::exit(1);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime");
    runtime.block_on(seed(url, service_key));
}

async fn seed(url: String, service_key: String) {
    let client = BackendClient::with_service_role(url, service_key);

    let email =
        std::env::var("LADLE_SEED_EMAIL").unwrap_or_else(|_| "jane@example.com".to_owned());
    let password =
        std::env::var("LADLE_SEED_PASSWORD").unwrap_or_else(|_| "StrongPass!123".to_owned());

    let user_id = match client.admin_create_user(&email, &password).await {
        Ok(user) => user.id,
        Err(error) if is_email_exists(&error) => {
            log::info!("User {email} already exists, reusing the account");
            let users = client
                .admin_list_users()
                .await
                .expect("failed to list existing users");
            users
                .into_iter()
                .find(|user| user.email.as_deref() == Some(email.as_str()))
                .map(|user| user.id)
                .expect("existing user is missing from the admin list")
        }
        Err(error) => {
            log::error!("Failed to create the seed user: {error}");
            std::process::exit(1);
        }
    };
    log::info!("Seed user {email} ready ({user_id})");

    let profile = ProfileUpsert {
        id: user_id.clone(),
        username: "chefjane".to_owned(),
        fullname: "Jane Doe".to_owned(),
    };
    client
        .upsert("profile", &profile, None)
        .await
        .expect("failed to upsert the seed profile");

    for payload in sample_recipes(&user_id) {
        let stored: Recipe = client
            .insert("recipe", &payload, None)
            .await
            .expect("failed to insert a seed recipe");
        log::info!("Seeded recipe \"{}\" ({})", payload.title, stored.id);
    }

    log::info!("Seeding finished");
}

fn is_email_exists(error: &ClientError) -> bool {
    matches!(
        error,
        ClientError::Auth(auth) if auth.error_code.as_deref() == Some("email_exists")
    )
}

fn sample_recipes(user_id: &str) -> Vec<RecipePayload> {
    vec![
        RecipePayload {
            user_id: Some(user_id.to_owned()),
            title: "Classic Pancakes".to_owned(),
            description: "Fluffy pancakes perfect for breakfast.".to_owned(),
            ingredients: "flour\nmilk\neggs\nsugar\nbaking powder\nsalt".to_owned(),
            cooking_time: 20,
            difficulty: vec![Difficulty::Easy.label().to_owned()],
            category: Category::Breakfast.label().to_owned(),
            instructions: vec![
                "Mix dry ingredients".to_owned(),
                "Add wet ingredients".to_owned(),
                "Cook on a hot greased pan".to_owned(),
            ],
            image_url: None,
        },
        RecipePayload {
            user_id: Some(user_id.to_owned()),
            title: "Creamy Carbonara".to_owned(),
            description: "Traditional pasta with eggs, cheese, and cured pork.".to_owned(),
            ingredients: "spaghetti\neggs\nguanciale or pancetta\npecorino romano\nblack pepper"
                .to_owned(),
            cooking_time: 25,
            difficulty: vec![Difficulty::Medium.label().to_owned()],
            category: Category::Main.label().to_owned(),
            instructions: vec![
                "Boil pasta".to_owned(),
                "Render guanciale".to_owned(),
                "Temper eggs with pasta water".to_owned(),
                "Combine off-heat and serve".to_owned(),
            ],
            image_url: None,
        },
    ]
}
