use sea_orm::{
    Order, QueryOrder,
    sea_query::{Func, SimpleExpr},
};

/// Random row order for recommendation lists, so results do not favour insertion order.
pub trait OrderByRandom: QueryOrder + Sized {
    fn order_by_random(mut self) -> Self {
        QueryOrder::query(&mut self)
            .order_by_expr(SimpleExpr::FunctionCall(Func::random()), Order::Asc);
        self
    }
}

impl<Q> OrderByRandom for Q where Q: QueryOrder {}
