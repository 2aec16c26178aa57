mod backend;
mod identity;
mod models;
mod session;
mod view;

use backend::{Backend, BackendConfig, HttpBackend};
use log::{error, info, warn};
use session::{PairSession, Slot, SlotBinding};
use std::env;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use view::RankingView;

#[tokio::main]
async fn main() {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    // The launch parameter names the user; everything else is anonymous.
    let launch_param = env::args().nth(1);
    let identity = identity::resolve_identity(launch_param.as_deref());
    info!("voting as '{}'", identity);

    let config = BackendConfig::from_env();
    info!("backend at {}", config.base_url);
    let backend: Arc<dyn Backend> = match HttpBackend::new(config) {
        Ok(b) => Arc::new(b),
        Err(e) => {
            error!("failed to build HTTP client: {}", e);
            return;
        }
    };

    let mut session = PairSession::new(Arc::clone(&backend), identity.clone());
    let mut view = RankingView::new(backend, identity);

    // Initial load: both panes fetch independently and concurrently; either
    // one failing must not stop the other.
    let (pair_result, rankings_result) = tokio::join!(session.load_pair(), view.refresh());
    if let Err(e) = pair_result {
        warn!("initial pair load failed: {}", e);
    }
    if let Err(e) = rankings_result {
        warn!("initial rankings load failed: {}", e);
    }

    render_screen(&session, &view);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("failed to read input: {}", e);
                break;
            }
        };

        match line.trim() {
            "1" => vote_on(&mut session, &mut view, Slot::A).await,
            "2" => vote_on(&mut session, &mut view, Slot::B).await,
            "r" => {
                let (pair_result, rankings_result) =
                    tokio::join!(session.load_pair(), view.refresh());
                if let Err(e) = pair_result {
                    warn!("pair reload failed: {}", e);
                }
                if let Err(e) = rankings_result {
                    warn!("rankings reload failed: {}", e);
                }
            }
            "q" | "quit" => break,
            "" => {}
            other => println!("unrecognized input '{}' (1, 2, r or q)", other),
        }

        render_screen(&session, &view);
    }
}

async fn vote_on(session: &mut PairSession, view: &mut RankingView, slot: Slot) {
    // The decision is built from the pair bound right now; a pair loaded
    // while the vote is in flight cannot retroactively change it.
    let Some(decision) = session.choose(slot) else {
        println!("No matchup is open for voting; press 'r' to load one.");
        return;
    };

    info!("voting '{}' over '{}'", decision.winner, decision.loser);
    if let Err(e) = session.cast_vote(view, decision).await {
        error!("vote submission failed: {}", e);
        println!("Your vote was not recorded; the matchup is unchanged.");
    }
}

fn render_screen(session: &PairSession, view: &RankingView) {
    println!();
    match session.binding() {
        SlotBinding::Empty => println!("No matchup available; press 'r' to reload."),
        SlotBinding::Armed(pair) => {
            println!("Which do you prefer?");
            println!("  [1] {}", pair.first);
            println!("  [2] {}", pair.second);
        }
        SlotBinding::Inert(pair) => {
            println!("Last matchup (voting disabled until 'r' reloads):");
            println!("  [1] {}", pair.first);
            println!("  [2] {}", pair.second);
        }
    }

    println!();
    println!("Rankings:");
    if view.entries().is_empty() {
        println!("  (none yet)");
    } else {
        print!("{}", view.render());
    }
}
