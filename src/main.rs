use std::env;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use polydash::api::{ApiClient, DEFAULT_TRADES_LIMIT};
use polydash::config::Config;
use polydash::models::{
    EventSort, LlmMode, RagCreateRequest, RagQueryRequest, SuperforecasterContext, TradeSide,
};
use polydash::pages::events::{days_left_label, market_preview};
use polydash::pages::format::{format_cents, format_pnl, format_volume, parse_amount};
use polydash::pages::news::age_label;
use polydash::pages::{
    AgentsPage, AutonomousTradingPage, ChatPage, DashboardPage, EventsPage, MarketCreationPage,
    MarketFilter, MarketsPage, NewsPage, TradingPage,
};

const USAGE: &str = "usage: polydash <command> [args]

commands:
  dashboard
  markets [all|open|closed]
  market <id>
  trades [limit]
  trade <market-id> <yes|no> <size> <price-cents>
  events [number_of_markets|end_date]
  event <id>
  news [query...]
  agents [toggle <id>]
  chat <general|polymarket|superforecaster> <message...>
  rag-create <local-directory>
  rag-query <vector-db-directory> <query...>
  rag-filter <query...>
  autonomous [--execute] [--live]
  idea";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polydash=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        println!("{}", USAGE);
        return Ok(());
    };

    let config = Config::from_env()?;
    let api = ApiClient::new(&config.api_url);
    info!("Using backend at {}", api.base_url());

    match command.as_str() {
        "dashboard" => dashboard(&api).await,
        "markets" => markets(&api, rest).await,
        "market" => market(&api, rest).await,
        "trades" => trades(&api, rest).await,
        "trade" => trade(&api, rest).await,
        "events" => events(&api, rest).await,
        "event" => event(&api, rest).await,
        "news" => news(&api, rest).await,
        "agents" => agents(&api, rest).await,
        "chat" => chat(&api, rest).await,
        "rag-create" => rag_create(&api, rest).await,
        "rag-query" => rag_query(&api, rest).await,
        "rag-filter" => rag_filter(&api, rest).await,
        "autonomous" => autonomous(&api, rest).await,
        "idea" => idea(&api).await,
        "help" | "--help" | "-h" => {
            println!("{}", USAGE);
            Ok(())
        }
        other => bail!("unknown command {:?}\n\n{}", other, USAGE),
    }
}

fn required<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("missing <{}>\n\n{}", name, USAGE))
}

async fn dashboard(api: &ApiClient) -> Result<()> {
    let mut page = DashboardPage::new();
    page.load(api).await;

    let Some(snapshot) = page.snapshot() else {
        return Ok(());
    };

    println!("Total markets: {}", snapshot.total_markets());
    println!("Active agents: {}", snapshot.active_agents());
    println!("Total trades:  {}", snapshot.total_trades());
    println!("Today P&L:     ${:.2}", snapshot.today_pnl());

    println!("\nRecent trades");
    if snapshot.recent_trades.is_empty() {
        println!("  No recent trades");
    }
    for trade in &snapshot.recent_trades {
        println!(
            "  {:<50} {:<3} ${:<8} {}c",
            trade.market_question,
            trade.side.as_str().to_uppercase(),
            trade.size,
            trade.price
        );
    }

    println!("\nAgents");
    if snapshot.agents.is_empty() {
        println!("  No agents configured");
    }
    for agent in &snapshot.agents {
        println!(
            "  {:<24} {:<8} {:>10} {} positions",
            agent.name,
            agent.status.as_str(),
            format_pnl(agent.pnl),
            agent.positions
        );
    }
    Ok(())
}

async fn markets(api: &ApiClient, args: &[String]) -> Result<()> {
    let filter = match args.first() {
        Some(arg) => MarketFilter::parse(arg).with_context(|| format!("unknown filter {:?}", arg))?,
        None => MarketFilter::All,
    };

    let mut page = MarketsPage::new();
    page.load(api).await;
    page.set_filter(filter);

    let visible = page.visible(Utc::now());
    if visible.is_empty() {
        println!("No markets found");
    }
    for market in visible {
        println!(
            "[{}] {}\n    Yes {} / No {}  vol ${}  liq ${}  ends {}",
            market.id,
            market.question,
            format_cents(market.yes_price),
            format_cents(market.no_price),
            format_volume(market.volume),
            format_volume(market.liquidity),
            market.end_date
        );
    }
    Ok(())
}

async fn market(api: &ApiClient, args: &[String]) -> Result<()> {
    let id = required(args, 0, "id")?;
    let market = api.get_market(id).await?;
    println!("{}", market.question);
    if !market.description.is_empty() {
        println!("{}", market.description);
    }
    println!(
        "Yes {} / No {}  vol ${}  ends {}",
        format_cents(market.yes_price),
        format_cents(market.no_price),
        format_volume(market.volume),
        market.end_date
    );
    Ok(())
}

async fn trades(api: &ApiClient, args: &[String]) -> Result<()> {
    let limit = match args.first() {
        Some(arg) => arg.parse().context("limit must be a number")?,
        None => DEFAULT_TRADES_LIMIT,
    };
    for trade in api.get_trades(limit).await? {
        println!(
            "{} {} {} ${} @ {} ({})",
            trade.timestamp,
            trade.market_question,
            trade.side,
            trade.size,
            trade.price,
            trade.status.as_str()
        );
    }
    Ok(())
}

async fn trade(api: &ApiClient, args: &[String]) -> Result<()> {
    let market_id = required(args, 0, "market-id")?;
    let side = TradeSide::parse(required(args, 1, "yes|no")?).context("side must be yes or no")?;
    let size = parse_amount(required(args, 2, "size")?).context("size must be a number")?;
    let price = parse_amount(required(args, 3, "price-cents")?).context("price must be a number")?;

    let mut page = TradingPage::new(Some(market_id.to_string()));
    page.load(api).await;
    if page.selected().is_none() {
        bail!("market {} not found", market_id);
    }

    page.set_side(side);
    page.set_size(Some(size));
    page.set_price_cents(Some(price));
    println!("Estimated cost:   ${:.2}", page.estimated_cost());
    println!("Potential return: ${:.2}", page.potential_return());

    if let Some(outcome) = page.submit(api).await {
        println!("{}", outcome.notice());
    }
    Ok(())
}

async fn events(api: &ApiClient, args: &[String]) -> Result<()> {
    let sort = match args.first() {
        Some(arg) => EventSort::parse(arg).with_context(|| format!("unknown sort {:?}", arg))?,
        None => EventSort::default(),
    };

    let mut page = EventsPage::new(sort);
    page.load(api).await;

    let now = Utc::now();
    if page.events().is_empty() {
        println!("No events found");
    }
    for event in page.events() {
        let (shown, more) = market_preview(event);
        let mut markets = shown.join(", ");
        if more > 0 {
            markets.push_str(&format!(" +{} more", more));
        }
        println!(
            "[{}] {} ({})\n    {}  markets: {}",
            event.id,
            event.title,
            event.ticker,
            days_left_label(&event.end_date, now),
            markets
        );
    }
    Ok(())
}

async fn event(api: &ApiClient, args: &[String]) -> Result<()> {
    let id = required(args, 0, "id")?;
    let event = api.get_event(id).await?;
    println!("{} ({})", event.title, event.ticker);
    if !event.description.is_empty() {
        println!("{}", event.description);
    }
    println!(
        "{}  active: {}  closed: {}  markets: {}",
        days_left_label(&event.end_date, Utc::now()),
        event.active,
        event.closed,
        event.markets.len()
    );
    Ok(())
}

async fn news(api: &ApiClient, args: &[String]) -> Result<()> {
    let mut page = NewsPage::new();
    page.load(api).await;

    if !args.is_empty() {
        page.set_query(args.join(" "));
        page.search(api).await;
    }

    let now = Utc::now();
    for item in page.news() {
        let relevance = item
            .relevance_percent()
            .map(|p| format!("  relevance {}%", p))
            .unwrap_or_default();
        println!(
            "{}\n    {} - {}{}\n    {}",
            item.title,
            item.source,
            age_label(&item.published_at, now),
            relevance,
            item.url
        );
    }
    Ok(())
}

async fn agents(api: &ApiClient, args: &[String]) -> Result<()> {
    let mut page = AgentsPage::new();
    page.load(api).await;

    if args.first().map(String::as_str) == Some("toggle") {
        let id = required(args, 1, "id")?;
        if let Err(notice) = page.toggle(api, id).await {
            bail!(notice);
        }
    }

    for agent in page.agents() {
        println!(
            "[{}] {:<24} {:<8} {:<16} {:>10} value ${:.2}  last {}",
            agent.id,
            agent.name,
            agent.status.as_str(),
            agent.strategy,
            format_pnl(agent.pnl),
            agent.total_value,
            agent.last_activity
        );
    }
    Ok(())
}

async fn chat(api: &ApiClient, args: &[String]) -> Result<()> {
    let mode_arg = required(args, 0, "mode")?;
    let mode = LlmMode::parse(mode_arg).with_context(|| format!("unknown mode {:?}", mode_arg))?;

    let mut page = ChatPage::new(mode);
    if mode == LlmMode::Superforecaster {
        page.context = SuperforecasterContext {
            event_title: env::var("POLYDASH_EVENT_TITLE").unwrap_or_default(),
            market_question: env::var("POLYDASH_MARKET_QUESTION").unwrap_or_default(),
            outcome: env::var("POLYDASH_OUTCOME").unwrap_or_default(),
        };
    }

    page.input = args[1..].join(" ");
    if !page.send(api).await {
        println!("Suggestions:");
        for prompt in polydash::pages::chat::suggestions(mode) {
            println!("  {}", prompt);
        }
        return Ok(());
    }

    for message in page.messages() {
        println!("[{:?}] {}", message.role, message.content);
    }
    Ok(())
}

async fn rag_create(api: &ApiClient, args: &[String]) -> Result<()> {
    let request = RagCreateRequest {
        local_directory: required(args, 0, "local-directory")?.to_string(),
    };
    let resp = api.create_rag_database(&request).await?;
    println!("{} (success: {})", resp.message, resp.success);
    Ok(())
}

async fn rag_query(api: &ApiClient, args: &[String]) -> Result<()> {
    let request = RagQueryRequest {
        vector_db_directory: required(args, 0, "vector-db-directory")?.to_string(),
        query: args[1..].join(" "),
    };
    let resp = api.query_rag_database(&request).await?;
    for result in resp.results {
        println!("{:?}  {}", result.score, result.content);
    }
    Ok(())
}

async fn rag_filter(api: &ApiClient, args: &[String]) -> Result<()> {
    let results = api.filter_events_rag(&args.join(" ")).await?;
    for result in results {
        println!("{}", result.content);
    }
    Ok(())
}

async fn autonomous(api: &ApiClient, args: &[String]) -> Result<()> {
    let mut page = AutonomousTradingPage::new();
    page.execute_trade = args.iter().any(|a| a == "--execute");
    page.dry_run = !args.iter().any(|a| a == "--live");
    page.run(api).await;

    let Some(resp) = page.response() else {
        return Ok(());
    };
    if let Some(error) = &resp.error {
        println!("Error: {}", error);
        return Ok(());
    }

    for (i, step) in resp.steps_completed.iter().enumerate() {
        println!("{}. {}", i + 1, step);
    }
    println!(
        "Events found {} / filtered {}  Markets found {} / filtered {}",
        resp.events_found, resp.events_filtered, resp.markets_found, resp.markets_filtered
    );
    if let Some(rec) = &resp.trade_recommendation {
        println!("\nRecommended trade:\n{}", rec.trade);
    }
    if resp.trade_executed {
        println!("\nTrade executed successfully");
    }
    Ok(())
}

async fn idea(api: &ApiClient) -> Result<()> {
    let mut page = MarketCreationPage::new();
    page.generate(api).await;

    if let Some(idea) = page.idea() {
        if let Some(error) = &idea.error {
            println!("Error: {}", error);
            return Ok(());
        }
        println!(
            "{}\n\n{}\n\nGenerated at {}",
            idea.market_description, idea.analysis, idea.timestamp
        );
    }
    Ok(())
}
