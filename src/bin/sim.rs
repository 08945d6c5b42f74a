use std::collections::HashSet;

use rand::{rngs::SmallRng, SeedableRng};
use salvo::{
    Catalog, Difficulty, MemoryCatalog, Mode, Opponent, Orientation, ParticipantId, Phase,
    ScriptedOpponent, SessionId, SessionStore, SideId, CLASSIC_TEMPLATE_ID,
};
use serde_json::json;

struct Driver {
    id: ParticipantId,
    opponent: ScriptedOpponent,
    rng: SmallRng,
}

impl Driver {
    fn new(name: &str, seed: u64) -> Self {
        Self {
            id: ParticipantId::from(name),
            opponent: ScriptedOpponent::new(Difficulty::Hard),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn place(&mut self, store: &SessionStore<MemoryCatalog>, session: SessionId) -> anyhow::Result<()> {
        let fleet = store.catalog().resolve(CLASSIC_TEMPLATE_ID)?;
        let layout = self
            .opponent
            .place_fleet(&mut self.rng, fleet.board_size, &fleet.ships)?;
        for (ship, cells) in layout {
            let start = cells
                .first()
                .ok_or_else(|| anyhow::anyhow!("empty footprint for {}", ship.name))?;
            store.place_ship(session, &self.id, &ship.id, &start.label(), Orientation::of(&cells))?;
        }
        Ok(())
    }

    fn shoot(&mut self, store: &SessionStore<MemoryCatalog>, session: SessionId) -> anyhow::Result<bool> {
        let view = store.board_view(session, &self.id)?;
        let already_shot: HashSet<u32> = view.shots_fired.iter().map(|s| s.key).collect();
        let target = self
            .opponent
            .select_target(&mut self.rng, view.board_size, &already_shot)?;
        let report = store.fire_shot(session, &self.id, &target.label())?;
        self.opponent
            .handle_shot_result(target, report.outcome.resolution());
        Ok(report.match_finished)
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let store = SessionStore::new(MemoryCatalog::classic());
    let mut p1 = Driver::new("player1", seed1);
    let mut p2 = Driver::new("player2", seed2);

    let session = store
        .create_session(&p1.id, CLASSIC_TEMPLATE_ID, Mode::TwoPlayer)?
        .id;
    store.join_session(session, &p2.id)?;
    p1.place(&store, session)?;
    p2.place(&store, session)?;

    loop {
        let summary = store.get_summary(session, None)?;
        let finished = match summary.phase {
            Phase::Side1Turn => p1.shoot(&store, session)?,
            Phase::Side2Turn => p2.shoot(&store, session)?,
            other => anyhow::bail!("unexpected phase {:?}", other),
        };
        if finished {
            break;
        }
    }

    let summary = store.get_summary(session, None)?;
    let s1 = store.statistics(session, &p1.id)?;
    let s2 = store.statistics(session, &p2.id)?;
    let winner = match summary.winner {
        Some(SideId::One) => Some("player1"),
        Some(SideId::Two) => Some("player2"),
        None => None,
    };

    let result = json!({
        "player1": {"shots": s1.shot_count, "hits": s1.hits, "accuracy": s1.accuracy},
        "player2": {"shots": s2.shot_count, "hits": s2.hits, "accuracy": s2.accuracy},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
