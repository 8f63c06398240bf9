//! Split space-free text such as `thisisatest` or `wordNinja2023` into the
//! most probable sequence of dictionary words.
//!
//! ```
//! use wordseg::{CostModel, WordSplitter};
//!
//! let model = CostModel::from_ranked(["this", "is", "a", "test"]).unwrap();
//! let splitter = WordSplitter::new(model);
//! assert_eq!(splitter.split_sentence("thisisatest").unwrap(), ["this", "is", "a", "test"]);
//! ```

pub mod chunk;
pub mod dictionary;
pub mod model;
pub mod options;
pub mod pipeline;
pub mod segmenter;
pub mod splitter;
pub mod stage;


pub use dictionary::DictionaryError;
pub use model::{CostModel, ModelError, SharedModel};
pub use options::{Split, SplitOptions, split_sentence};
pub use pipeline::Pipeline;
pub use segmenter::{best_cost, split_words};
pub use splitter::{SplitError, WordSplitter, WordSplitterBuilder};
pub use stage::camel_case_split::CamelCaseSplit;
pub use stage::capitalize_first_letter::CapitalizeFirstLetter;
pub use stage::lower_case::LowerCase;
pub use stage::{Stage, StageError};
