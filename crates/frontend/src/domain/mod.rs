pub mod a001_pizza_order;
