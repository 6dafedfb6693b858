// Domain layer: the `Time` value type. The codec lives in `core`.

pub mod model;
