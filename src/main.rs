use anyhow::Context;
use fastfood_api_rust::config::AppConfig;
use fastfood_api_rust::logger;
use fastfood_api_rust::router::create_app_router;
use fastfood_api_rust::state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::debug!("Config: {:?}", config);

    // Load reference data once; it is read-only from here on
    let state = Arc::new(
        AppState::load(&config)
            .await
            .context("failed to load reference data")?,
    );

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.socket_addr();
    tracing::info!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use fastfood_api_rust::cart::{cart_handler, PluIndex};
    use fastfood_api_rust::combo::{calorie_counter_handler, CalorieRange};
    use fastfood_api_rust::menu::{menu_handler, MenuProvider};
    use fastfood_api_rust::state::AppState;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_handlers_return_envelopes() {
        let state = AppState {
            menu: MenuProvider::from_json(r#"{"name":"PLK"}"#.to_string()).unwrap(),
            cart: serde_json::from_value(json!({ "order": { "items": [{ "plunum": "11" }] } }))
                .unwrap(),
            plu_index: [("plu_11".to_string(), 0)].into_iter().collect::<PluIndex>(),
            combo_calories: CalorieRange {
                min_calories: 1.0,
                max_calories: 2.0,
            },
        };

        let menu = menu_handler(&state).await;
        assert_eq!(menu.status_code, 200);
        assert_eq!(menu.body, r#"{"data":{"name":"PLK"}}"#);

        let cart = cart_handler(&state).await;
        let body: Value = serde_json::from_str(&cart.body).unwrap();
        assert_eq!(body["data"]["order"]["items"][0], json!({ "itemId": 0 }));

        let calories = calorie_counter_handler(&state).await;
        let body: Value = serde_json::from_str(&calories.body).unwrap();
        assert_eq!(body["data"]["minCalories"], 1.0);
        assert_eq!(body["data"]["maxCalories"], 2.0);
    }
}
