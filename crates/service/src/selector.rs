//! Best-quote selection

use ur_types::{Quote, TradeType};

/// Pick the best quote for the trade direction
///
/// EXACT_INPUT maximizes the output amount, EXACT_OUTPUT minimizes the input
/// amount. A candidate only displaces the incumbent when strictly better, so
/// the first of several equal quotes wins.
pub fn select_best(quotes: Vec<Quote>, trade_type: TradeType) -> Option<Quote> {
	quotes.into_iter().reduce(|best, candidate| {
		if is_better(&candidate, &best, trade_type) {
			candidate
		} else {
			best
		}
	})
}

fn is_better(candidate: &Quote, incumbent: &Quote, trade_type: TradeType) -> bool {
	match trade_type {
		TradeType::ExactInput => candidate.amount_out() > incumbent.amount_out(),
		TradeType::ExactOutput => candidate.amount_in() < incumbent.amount_in(),
	}
}
