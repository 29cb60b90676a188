// ============================================================================
// REQUEST GUARD - Descarta respuestas obsoletas de peticiones async
// ============================================================================
// Cada `begin()` invalida los tickets anteriores. Al volver la respuesta,
// solo se escribe en el estado si el ticket sigue siendo el último.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct RequestGuard {
    latest: Rc<Cell<u64>>,
}

#[derive(Clone)]
pub struct RequestTicket {
    id: u64,
    latest: Rc<Cell<u64>>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestTicket {
        let id = self.latest.get().wrapping_add(1);
        self.latest.set(id);
        RequestTicket {
            id,
            latest: self.latest.clone(),
        }
    }

    /// Ticket de la secuencia actual sin invalidar nada (p.ej. la carga de página en curso)
    pub fn current(&self) -> RequestTicket {
        RequestTicket {
            id: self.latest.get(),
            latest: self.latest.clone(),
        }
    }

    /// Invalidar todo lo que esté en vuelo sin abrir una petición nueva
    pub fn invalidate(&self) {
        self.begin();
    }
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.latest.get() == self.id
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let guard = RequestGuard::new();
        let first = guard.begin();
        assert!(first.is_current());

        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn current_ticket_does_not_bump_the_sequence() {
        let guard = RequestGuard::new();
        let page = guard.begin();
        let snapshot = guard.current();
        assert!(page.is_current());
        assert_eq!(snapshot.id(), page.id());
    }

    #[test]
    fn invalidate_drops_in_flight_requests() {
        let guard = RequestGuard::new();
        let ticket = guard.begin();
        guard.clone().invalidate();
        assert!(!ticket.is_current());
    }
}
