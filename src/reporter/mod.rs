pub mod terminal;

use crate::catalog::Catalog;
use crate::scanner::ScanSession;

pub trait Reporter {
    fn report(&self, session: &ScanSession, catalog: &Catalog) -> String;
}
