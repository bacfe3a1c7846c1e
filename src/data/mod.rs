/// Data layer: payload model, file codec, and the lowercase transform.
///
/// Architecture:
/// ```text
///  .json / .csv / anything else
///        │
///        ▼
///   ┌──────────┐
///   │  codec    │  Format::from_path → parse file → Payload
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ transform  │  lowercase keys, render + lowercase values
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  codec    │  Payload → .json / .csv / text
///   └──────────┘
/// ```

pub mod codec;
pub mod model;
pub mod transform;
