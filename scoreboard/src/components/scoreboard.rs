//! The root owner of the player collection

use tracing::debug;
use trellis::prelude::*;

use crate::components::{Header, HeaderProps, Player, PlayerProps};
use crate::roster::{PlayerId, PlayerRecord, Roster};

/// Owns the canonical player list. Children never touch this state:
/// the header gets a derived count, each row gets its own record plus
/// a removal callback bound here.
pub struct Scoreboard {
    players: Vec<PlayerRecord>,
}

pub enum ScoreboardMsg {
    RemovePlayer(PlayerId),
}

impl Component for Scoreboard {
    type Props = Roster;
    type Message = ScoreboardMsg;

    fn create(props: &Roster) -> Self {
        Self {
            players: props.players().to_vec(),
        }
    }

    fn update(&mut self, message: ScoreboardMsg) {
        match message {
            ScoreboardMsg::RemovePlayer(id) => {
                // Folded over the list as it is right now; an id that
                // is already gone removes nothing.
                debug!(player = id, "removal requested");
                self.players.retain(|player| player.id != id);
            }
        }
    }

    fn view(&self, _props: &Roster, link: &Link<Self>) -> Node {
        let on_remove = link.callback(ScoreboardMsg::RemovePlayer);
        Node::section(
            "scoreboard",
            vec![
                Node::component::<Header>(HeaderProps {
                    title: "Scoreboard".to_string(),
                    total_players: self.players.len(),
                }),
                Node::section(
                    "players",
                    self.players
                        .iter()
                        .map(|player| {
                            Node::keyed::<Player>(
                                player.id,
                                PlayerProps {
                                    id: player.id,
                                    name: player.name.clone(),
                                    on_remove: on_remove.clone(),
                                },
                            )
                        })
                        .collect(),
                ),
            ],
        )
    }
}
