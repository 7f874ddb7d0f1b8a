//! Committed output trees and queries over them

use std::fmt;

use crate::core::{Callback, InstanceId};

/// A committed node as stored per instance, before child component
/// slots are resolved into their own output.
pub(crate) enum Fragment {
    Text(String),
    Trigger {
        label: String,
        on_press: Callback<()>,
    },
    Section {
        name: &'static str,
        children: Vec<Fragment>,
    },
    /// Placeholder for a mounted child component's own output
    Child(InstanceId),
}

/// The resolved committed output: what a presenter consumes.
///
/// Component boundaries are expanded away; only content remains.
/// Cloning is shallow for triggers - the callback still reaches the
/// same owner.
#[derive(Clone)]
pub enum Rendered {
    Text(String),
    Trigger {
        label: String,
        on_press: Callback<()>,
    },
    Section {
        name: &'static str,
        children: Vec<Rendered>,
    },
}

impl Rendered {
    /// All text leaves, depth-first.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Rendered::Text(content) => out.push(content.as_str()),
            Rendered::Trigger { .. } => {}
            Rendered::Section { children, .. } => {
                for child in children {
                    child.collect_texts(out);
                }
            }
        }
    }

    /// Whether any text leaf equals `needle` exactly.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|text| *text == needle)
    }

    /// Every section named `name`, depth-first, including self.
    pub fn sections(&self, name: &str) -> Vec<&Rendered> {
        let mut out = Vec::new();
        self.collect_sections(name, &mut out);
        out
    }

    fn collect_sections<'a>(&'a self, name: &str, out: &mut Vec<&'a Rendered>) {
        if let Rendered::Section {
            name: own,
            children,
        } = self
        {
            if *own == name {
                out.push(self);
            }
            for child in children {
                child.collect_sections(name, out);
            }
        }
    }

    /// The first section named `name`, depth-first.
    pub fn section(&self, name: &str) -> Option<&Rendered> {
        self.sections(name).into_iter().next()
    }

    /// The callback of the first trigger labelled `label`, depth-first.
    pub fn trigger(&self, label: &str) -> Option<Callback<()>> {
        match self {
            Rendered::Text(_) => None,
            Rendered::Trigger { label: own, on_press } => {
                (own == label).then(|| on_press.clone())
            }
            Rendered::Section { children, .. } => {
                children.iter().find_map(|child| child.trigger(label))
            }
        }
    }
}

impl fmt::Debug for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Text(content) => write!(f, "{content:?}"),
            Rendered::Trigger { label, .. } => write!(f, "[{label}]"),
            Rendered::Section { name, children } => {
                write!(f, "{name}")?;
                f.debug_list().entries(children).finish()
            }
        }
    }
}
