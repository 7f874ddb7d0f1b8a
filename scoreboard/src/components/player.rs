//! One roster row

use trellis::prelude::*;

use crate::components::Counter;
use crate::roster::PlayerId;

#[derive(Clone)]
pub struct PlayerProps {
    pub id: PlayerId,
    pub name: String,
    /// Owner-supplied removal request; invoked with this row's id.
    pub on_remove: Callback<PlayerId>,
}

/// Stateless row: removal trigger, name, one embedded Counter. The
/// score lives with the Counter, not here.
pub struct Player;

impl Component for Player {
    type Props = PlayerProps;
    type Message = ();

    fn create(_props: &PlayerProps) -> Self {
        Self
    }

    fn update(&mut self, _message: ()) {}

    fn view(&self, props: &PlayerProps, _link: &Link<Self>) -> Node {
        let id = props.id;
        Node::section(
            "player",
            vec![
                Node::trigger("✖", props.on_remove.reform(move |()| id)),
                Node::text(props.name.clone()),
                Node::component::<Counter>(()),
            ],
        )
    }
}
