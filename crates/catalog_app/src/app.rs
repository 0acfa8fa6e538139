use std::io::Write;

use anyhow::Result;
use catalog_core::{CatalogRepository, CatalogStore, SiteForm};
use catalog_engine::AssistantHandle;
use catalog_logging::catalog_info;

use crate::render;

/// A single user request, from either the command line or the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search(String),
    Add(SiteForm),
    Delete(String),
    List,
    ShowLog,
    Ask(String),
}

/// Owns the one catalog store of the process and the optional assistant.
pub struct App<R> {
    store: CatalogStore<R>,
    assistant: Option<AssistantHandle>,
}

impl<R: CatalogRepository> App<R> {
    pub fn new(store: CatalogStore<R>, assistant: Option<AssistantHandle>) -> Self {
        Self { store, assistant }
    }

    pub fn execute<W: Write>(&mut self, action: Action, out: &mut W) -> Result<()> {
        match action {
            Action::Search(query) => {
                let results = self.store.search(&query);
                write!(out, "{}", render::search_results(&results))?;
            }
            Action::Add(form) => {
                let site = form.into_site();
                catalog_info!("Adding site {}", site.url);
                self.store.add(site)?;
                write!(out, "{}", self.store.activity().snapshot())?;
            }
            Action::Delete(url) => {
                let outcome = self.store.delete(&url)?;
                writeln!(out, "{outcome}")?;
            }
            Action::List => {
                write!(out, "{}", render::url_listing(&self.store.url_listing()))?;
            }
            Action::ShowLog => {
                write!(out, "{}", self.store.activity().snapshot())?;
            }
            Action::Ask(question) => match self.assistant.as_mut() {
                Some(assistant) => {
                    let turn = assistant.ask(&question)?;
                    writeln!(out, "{}", turn.answer)?;
                }
                None => writeln!(out, "The assistant is not configured.")?,
            },
        }
        Ok(())
    }

    pub fn activity_snapshot(&self) -> &str {
        self.store.activity().snapshot()
    }
}
