//! 四个阶段Agent
//!
//! 每个Agent的`execute`都保证返回非空文本：正常结果、阶段兜底文案、
//! 或带阶段前缀的错误诊断，错误从不越过阶段边界。

pub mod proposal;
pub mod research;
pub mod resource;
pub mod use_case;

pub use proposal::ProposalAgent;
pub use research::ResearchAgent;
pub use resource::ResourceAgent;
pub use use_case::UseCaseAgent;
