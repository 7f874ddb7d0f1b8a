//! The runtime: mounting, keyed reconciliation, and update application

mod instance;

use std::any::TypeId;
use std::collections::{HashMap, HashSet};

use instance::{ChildKey, MountedInstance};

use crate::core::queue::{update_channel, UpdateQueue, UpdateReceiver};
use crate::core::{next_instance_id, ChildSpec, Component, InstanceId, Node};
use crate::render::{Fragment, Rendered};

/// Owns every mounted component instance and applies queued updates.
///
/// This stands in for the external rendering engine: it diffs declared
/// trees at component boundaries and preserves an instance (and its
/// state) across re-renders for as long as its identity key is
/// unchanged.
pub struct Runtime {
    instances: HashMap<InstanceId, MountedInstance>,
    root: InstanceId,
    queue: UpdateQueue,
    pending: UpdateReceiver,
}

impl Runtime {
    /// Mount `C` as the root component and render it once.
    pub fn mount<C: Component>(props: C::Props) -> Self {
        let (queue, pending) = update_channel();
        let mut runtime = Self {
            instances: HashMap::new(),
            root: 0,
            queue,
            pending,
        };
        let mut refreshed = HashSet::new();
        let root = runtime.mount_spec(ChildSpec::of::<C>(None, props), 0, &mut refreshed);
        runtime.root = root;
        runtime
    }

    /// Resolve the committed output tree.
    pub fn rendered(&self) -> Rendered {
        self.resolve(self.root)
    }

    /// Number of currently mounted instances.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Apply every queued update, then re-render the owners that
    /// changed, shallowest first, so a parent's structural render runs
    /// before any surviving child re-renders on its own.
    pub fn flush(&mut self) {
        loop {
            let envelopes = self.pending.drain();
            if envelopes.is_empty() {
                break;
            }

            let mut dirty: Vec<InstanceId> = Vec::new();
            for envelope in envelopes {
                match self.instances.get_mut(&envelope.target) {
                    Some(owner) => {
                        (envelope.apply)(owner.state.as_mut());
                        if !dirty.contains(&envelope.target) {
                            dirty.push(envelope.target);
                        }
                    }
                    None => {
                        // The owner unmounted after the request was
                        // made; the request no-ops.
                        tracing::debug!(
                            instance = envelope.target,
                            "dropping update for unmounted instance"
                        );
                    }
                }
            }

            dirty.sort_by_key(|id| {
                self.instances
                    .get(id)
                    .map(|owner| owner.depth)
                    .unwrap_or(usize::MAX)
            });

            let mut refreshed = HashSet::new();
            for id in dirty {
                if refreshed.contains(&id) || !self.instances.contains_key(&id) {
                    continue;
                }
                self.render_instance(id, &mut refreshed);
            }
        }
    }

    fn resolve(&self, id: InstanceId) -> Rendered {
        match self.instances.get(&id) {
            Some(owner) => self.resolve_fragment(&owner.fragment),
            None => Rendered::Section {
                name: "",
                children: Vec::new(),
            },
        }
    }

    fn resolve_fragment(&self, fragment: &Fragment) -> Rendered {
        match fragment {
            Fragment::Text(content) => Rendered::Text(content.clone()),
            Fragment::Trigger { label, on_press } => Rendered::Trigger {
                label: label.clone(),
                on_press: on_press.clone(),
            },
            Fragment::Section { name, children } => Rendered::Section {
                name: *name,
                children: children
                    .iter()
                    .map(|child| self.resolve_fragment(child))
                    .collect(),
            },
            Fragment::Child(child) => self.resolve(*child),
        }
    }

    fn mount_spec(
        &mut self,
        spec: ChildSpec,
        depth: usize,
        refreshed: &mut HashSet<InstanceId>,
    ) -> InstanceId {
        let id = next_instance_id();
        refreshed.insert(id);

        let state = (spec.create)(spec.props.as_ref());
        let node = (spec.view)(state.as_ref(), spec.props.as_ref(), id, &self.queue);

        let previous = HashMap::new();
        let mut children = HashMap::new();
        let mut positions = HashMap::new();
        let fragment =
            self.reconcile_node(node, &previous, &mut children, &mut positions, depth + 1, refreshed);

        tracing::debug!(instance = id, component = spec.type_name, "mounted");
        self.instances.insert(
            id,
            MountedInstance {
                type_name: spec.type_name,
                depth,
                state,
                props: spec.props,
                view: spec.view,
                children,
                fragment,
            },
        );
        id
    }

    fn render_instance(&mut self, id: InstanceId, refreshed: &mut HashSet<InstanceId>) {
        refreshed.insert(id);

        let (node, previous, depth) = match self.instances.get(&id) {
            Some(owner) => {
                let node = (owner.view)(owner.state.as_ref(), owner.props.as_ref(), id, &self.queue);
                (node, owner.children.clone(), owner.depth)
            }
            None => return,
        };

        let mut children = HashMap::new();
        let mut positions = HashMap::new();
        let fragment =
            self.reconcile_node(node, &previous, &mut children, &mut positions, depth + 1, refreshed);

        for (_, old_id) in &previous {
            if !children.values().any(|kept| kept == old_id) {
                self.unmount(*old_id);
            }
        }

        if let Some(owner) = self.instances.get_mut(&id) {
            owner.children = children;
            owner.fragment = fragment;
        }
    }

    fn reconcile_node(
        &mut self,
        node: Node,
        previous: &HashMap<ChildKey, InstanceId>,
        children: &mut HashMap<ChildKey, InstanceId>,
        positions: &mut HashMap<TypeId, usize>,
        depth: usize,
        refreshed: &mut HashSet<InstanceId>,
    ) -> Fragment {
        match node {
            Node::Text(content) => Fragment::Text(content),
            Node::Trigger { label, on_press } => Fragment::Trigger { label, on_press },
            Node::Section {
                name,
                children: nodes,
            } => Fragment::Section {
                name,
                children: nodes
                    .into_iter()
                    .map(|child| {
                        self.reconcile_node(child, previous, children, positions, depth, refreshed)
                    })
                    .collect(),
            },
            Node::Component(spec) => {
                let mut key = match spec.key {
                    Some(key) => ChildKey::Keyed(spec.type_id, key),
                    None => next_position(positions, spec.type_id),
                };
                if children.contains_key(&key) {
                    tracing::warn!(
                        component = spec.type_name,
                        "duplicate sibling key, falling back to positional identity"
                    );
                    key = next_position(positions, spec.type_id);
                }

                let id = match previous.get(&key) {
                    Some(&existing) if self.instances.contains_key(&existing) => {
                        if let Some(owner) = self.instances.get_mut(&existing) {
                            owner.props = spec.props;
                            owner.depth = depth;
                        }
                        self.render_instance(existing, refreshed);
                        existing
                    }
                    _ => self.mount_spec(spec, depth, refreshed),
                };
                children.insert(key, id);
                Fragment::Child(id)
            }
        }
    }

    fn unmount(&mut self, id: InstanceId) {
        if let Some(owner) = self.instances.remove(&id) {
            tracing::debug!(instance = id, component = owner.type_name, "unmounted");
            for (_, child) in owner.children {
                self.unmount(child);
            }
        }
    }
}

fn next_position(positions: &mut HashMap<TypeId, usize>, type_id: TypeId) -> ChildKey {
    let slot = positions.entry(type_id).or_insert(0);
    let key = ChildKey::Positional(type_id, *slot);
    *slot += 1;
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Component, Link, Node};

    struct Tally {
        count: i32,
    }

    enum TallyMsg {
        Add(i32),
    }

    impl Component for Tally {
        type Props = ();
        type Message = TallyMsg;

        fn create(_props: &()) -> Self {
            Self { count: 0 }
        }

        fn update(&mut self, message: TallyMsg) {
            match message {
                TallyMsg::Add(delta) => self.count += delta,
            }
        }

        fn view(&self, _props: &(), link: &Link<Self>) -> Node {
            Node::section(
                "tally",
                vec![
                    Node::trigger("+", link.callback(|()| TallyMsg::Add(1))),
                    Node::text(self.count.to_string()),
                ],
            )
        }
    }

    /// Parent owning a list of labelled rows, one keyed Tally per row.
    struct Board {
        rows: Vec<(u64, String)>,
    }

    enum BoardMsg {
        Drop(u64),
        Put(u64, String),
    }

    impl Component for Board {
        type Props = Vec<(u64, String)>;
        type Message = BoardMsg;

        fn create(props: &Vec<(u64, String)>) -> Self {
            Self {
                rows: props.clone(),
            }
        }

        fn update(&mut self, message: BoardMsg) {
            match message {
                BoardMsg::Drop(id) => self.rows.retain(|(row, _)| *row != id),
                BoardMsg::Put(id, label) => self.rows.push((id, label)),
            }
        }

        fn view(&self, _props: &Vec<(u64, String)>, link: &Link<Self>) -> Node {
            let remove = link.callback(BoardMsg::Drop);
            let mut children = vec![Node::trigger(
                "restore",
                link.callback(|()| BoardMsg::Put(1, "a".to_string())),
            )];
            children.extend(self.rows.iter().map(|(id, label)| {
                let row = *id;
                Node::section(
                    "row",
                    vec![
                        Node::text(label.clone()),
                        Node::trigger("drop", remove.reform(move |()| row)),
                        Node::keyed::<Tally>(row, ()),
                    ],
                )
            }));
            Node::section("board", children)
        }
    }

    /// Parent with two unkeyed Tally children and a re-render trigger.
    struct Pair {
        ticks: i32,
    }

    enum PairMsg {
        Tick,
    }

    impl Component for Pair {
        type Props = ();
        type Message = PairMsg;

        fn create(_props: &()) -> Self {
            Self { ticks: 0 }
        }

        fn update(&mut self, message: PairMsg) {
            match message {
                PairMsg::Tick => self.ticks += 1,
            }
        }

        fn view(&self, _props: &(), link: &Link<Self>) -> Node {
            Node::section(
                "pair",
                vec![
                    Node::text(self.ticks.to_string()),
                    Node::trigger("tick", link.callback(|()| PairMsg::Tick)),
                    Node::component::<Tally>(()),
                    Node::component::<Tally>(()),
                ],
            )
        }
    }

    fn board_rows() -> Vec<(u64, String)> {
        vec![
            (1, "a".to_string()),
            (2, "b".to_string()),
            (3, "c".to_string()),
        ]
    }

    fn row_with_text(ui: &Rendered, needle: &str) -> Option<Rendered> {
        ui.sections("row")
            .into_iter()
            .find(|row| row.contains_text(needle))
            .cloned()
    }

    #[test]
    fn test_mount_renders_tree() {
        let runtime = Runtime::mount::<Tally>(());
        assert_eq!(runtime.rendered().texts(), vec!["0"]);
        assert_eq!(runtime.instance_count(), 1);
    }

    #[test]
    fn test_queued_updates_fold_over_current_state() {
        let mut runtime = Runtime::mount::<Tally>(());
        let increment = runtime.rendered().trigger("+").unwrap();

        // Three requests before a single flush must all land.
        increment.emit(());
        increment.emit(());
        increment.emit(());
        runtime.flush();

        assert_eq!(runtime.rendered().texts(), vec!["3"]);
    }

    #[test]
    fn test_keyed_row_keeps_state_when_sibling_removed() {
        let mut runtime = Runtime::mount::<Board>(board_rows());
        assert_eq!(runtime.instance_count(), 4);

        let row_b = row_with_text(&runtime.rendered(), "b").unwrap();
        let increment = row_b.trigger("+").unwrap();
        increment.emit(());
        increment.emit(());
        runtime.flush();

        let row_a = row_with_text(&runtime.rendered(), "a").unwrap();
        row_a.trigger("drop").unwrap().emit(());
        runtime.flush();

        let ui = runtime.rendered();
        assert_eq!(ui.texts(), vec!["b", "2", "c", "0"]);
        assert_eq!(runtime.instance_count(), 3);
    }

    #[test]
    fn test_readded_key_mounts_fresh_state() {
        let mut runtime = Runtime::mount::<Board>(vec![(1, "a".to_string())]);

        runtime.rendered().trigger("+").unwrap().emit(());
        runtime.flush();
        assert_eq!(runtime.rendered().texts(), vec!["a", "1"]);

        runtime.rendered().trigger("drop").unwrap().emit(());
        runtime.flush();
        assert_eq!(runtime.instance_count(), 1);

        // The same key mounted again starts over; nothing carries across.
        runtime.rendered().trigger("restore").unwrap().emit(());
        runtime.flush();
        assert_eq!(runtime.rendered().texts(), vec!["a", "0"]);
        assert_eq!(runtime.instance_count(), 2);
    }

    #[test]
    fn test_stale_callback_is_noop() {
        let mut runtime = Runtime::mount::<Board>(board_rows());

        let row_b = row_with_text(&runtime.rendered(), "b").unwrap();
        let stale_increment = row_b.trigger("+").unwrap();

        row_b.trigger("drop").unwrap().emit(());
        runtime.flush();
        let before = runtime.rendered().texts().join(",");

        stale_increment.emit(());
        runtime.flush();

        assert_eq!(runtime.rendered().texts().join(","), before);
        assert_eq!(runtime.instance_count(), 3);
    }

    #[test]
    fn test_positional_children_match_by_order() {
        let mut runtime = Runtime::mount::<Pair>(());

        let second = runtime.rendered().sections("tally")[1]
            .trigger("+")
            .unwrap();
        second.emit(());
        runtime.flush();
        assert_eq!(runtime.rendered().texts(), vec!["0", "0", "1"]);

        // A parent re-render must re-match both children by order.
        runtime.rendered().trigger("tick").unwrap().emit(());
        runtime.flush();
        assert_eq!(runtime.rendered().texts(), vec!["1", "0", "1"]);
    }

    #[test]
    fn test_duplicate_keys_fall_back_to_position() {
        let rows = vec![(7, "x".to_string()), (7, "y".to_string())];
        let mut runtime = Runtime::mount::<Board>(rows);
        assert_eq!(runtime.instance_count(), 3);

        let row_y = row_with_text(&runtime.rendered(), "y").unwrap();
        row_y.trigger("+").unwrap().emit(());
        runtime.flush();

        let ui = runtime.rendered();
        assert_eq!(ui.texts(), vec!["x", "0", "y", "1"]);
    }

    #[test]
    fn test_updates_to_different_owners_are_independent() {
        let mut runtime = Runtime::mount::<Board>(board_rows());

        let ui = runtime.rendered();
        let inc_a = row_with_text(&ui, "a").unwrap().trigger("+").unwrap();
        let inc_c = row_with_text(&ui, "c").unwrap().trigger("+").unwrap();
        inc_a.emit(());
        inc_c.emit(());
        inc_a.emit(());
        runtime.flush();

        assert_eq!(runtime.rendered().texts(), vec!["a", "2", "b", "0", "c", "1"]);
    }
}
