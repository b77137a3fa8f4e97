//! Shared test fixtures: a seeded five-column board and a recording
//! workflow gateway that logs calls, serves canned results, and can be
//! scripted to fail per operation.
#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use boardwalk::github::{Branch, CreatedIssue, CreatedPullRequest, GitHubError, WorkflowGateway};
use boardwalk::store::BoardStore;
use boardwalk::{BoardEngine, ColumnId, IssueRef, Item, MemoryStore, ProjectId, PullRequestRef};

/// Ids of the seeded board.
pub struct Board {
    pub store: Arc<MemoryStore>,
    pub project: ProjectId,
    pub backlog: ColumnId,
    pub todo: ColumnId,
    pub in_progress: ColumnId,
    pub ready: ColumnId,
    pub done: ColumnId,
}

/// A project with the five canonical columns.
pub async fn five_column_board() -> Board {
    let store = Arc::new(MemoryStore::new());
    let project = store.add_project("go-live").await;
    let backlog = store.add_column(project, "Backlog").await;
    let todo = store.add_column(project, "Todo").await;
    let in_progress = store.add_column(project, "In Progress").await;
    let ready = store.add_column(project, "Ready for Pull Request").await;
    let done = store.add_column(project, "Done").await;
    Board {
        store,
        project,
        backlog,
        todo,
        in_progress,
        ready,
        done,
    }
}

pub async fn engine_with_board() -> (
    BoardEngine<MemoryStore, RecordingGateway>,
    Board,
    Arc<RecordingGateway>,
) {
    let board = five_column_board().await;
    let gateway = Arc::new(RecordingGateway::new());
    let engine = BoardEngine::new(Arc::clone(&board.store), Arc::clone(&gateway));
    (engine, board, gateway)
}

/// Append an item and apply linkage mutations through the store.
pub async fn seed_item(
    store: &MemoryStore,
    column: ColumnId,
    name: &str,
    mutate: impl FnOnce(&mut Item),
) -> Item {
    let mut item = store.append_item(name, column).await.unwrap();
    mutate(&mut item);
    store.update_item(item.id, &item).await.unwrap()
}

pub fn issue_ref(number: u64) -> IssueRef {
    IssueRef {
        id: 1000 + number,
        number,
        url: format!("https://github.com/acme/widgets/issues/{number}"),
    }
}

pub fn pull_request_ref(number: u64) -> PullRequestRef {
    PullRequestRef {
        id: 2000 + number,
        number,
    }
}

/// Calls observed by the recording gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    CreateIssue {
        title: String,
    },
    ListBranches,
    CreateBranch {
        name: String,
        from_sha: String,
    },
    DeleteBranch {
        name: String,
    },
    CreatePullRequest {
        head: String,
        base: String,
        issue_number: Option<u64>,
        title: String,
    },
    MergePullRequest {
        number: u64,
        commit_title: String,
        commit_message: String,
    },
}

/// Which gateway operations are scripted to fail.
#[derive(Debug, Default)]
pub struct FailureFlags {
    pub create_issue: bool,
    pub create_branch: bool,
    pub create_pull_request: bool,
    pub merge_pull_request: bool,
    pub delete_branch: bool,
}

#[derive(Debug)]
pub struct RecordingGateway {
    pub calls: Mutex<Vec<GatewayCall>>,
    pub branches: Mutex<Vec<Branch>>,
    pub fail: Mutex<FailureFlags>,
    delay: Mutex<Option<Duration>>,
    next_number: AtomicU64,
}

impl Default for RecordingGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::with_branches(vec![
            Branch {
                name: "main".to_string(),
                sha: "abc123".to_string(),
            },
            Branch {
                name: "develop".to_string(),
                sha: "def456".to_string(),
            },
        ])
    }

    pub fn with_branches(branches: Vec<Branch>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            branches: Mutex::new(branches),
            fail: Mutex::new(FailureFlags::default()),
            delay: Mutex::new(None),
            next_number: AtomicU64::new(1),
        }
    }

    /// Make every call sleep, to widen race windows in concurrency tests.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn count_of(&self, matcher: impl Fn(&GatewayCall) -> bool) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matcher(call))
            .count()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }

    async fn simulate_latency(&self) {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn scripted_failure() -> GitHubError {
        GitHubError::Upstream {
            status: 502,
            body: "scripted failure".to_string(),
        }
    }
}

#[async_trait]
impl WorkflowGateway for RecordingGateway {
    async fn create_issue(&self, title: &str) -> Result<CreatedIssue, GitHubError> {
        self.record(GatewayCall::CreateIssue {
            title: title.to_string(),
        });
        self.simulate_latency().await;
        if self.fail.lock().unwrap().create_issue {
            return Err(Self::scripted_failure());
        }
        let number = self.next_number.fetch_add(1, Ordering::SeqCst);
        Ok(CreatedIssue {
            id: 1000 + number,
            number,
            url: format!("https://github.com/acme/widgets/issues/{number}"),
        })
    }

    async fn list_branches(&self) -> Result<Vec<Branch>, GitHubError> {
        self.record(GatewayCall::ListBranches);
        self.simulate_latency().await;
        Ok(self.branches.lock().unwrap().clone())
    }

    async fn create_branch(&self, name: &str, from_sha: &str) -> Result<Branch, GitHubError> {
        self.record(GatewayCall::CreateBranch {
            name: name.to_string(),
            from_sha: from_sha.to_string(),
        });
        self.simulate_latency().await;
        if self.fail.lock().unwrap().create_branch {
            return Err(Self::scripted_failure());
        }
        let branch = Branch {
            name: name.to_string(),
            sha: from_sha.to_string(),
        };
        self.branches.lock().unwrap().push(branch.clone());
        Ok(branch)
    }

    async fn delete_branch(&self, name: &str) -> Result<(), GitHubError> {
        self.record(GatewayCall::DeleteBranch {
            name: name.to_string(),
        });
        self.simulate_latency().await;
        if self.fail.lock().unwrap().delete_branch {
            return Err(Self::scripted_failure());
        }
        self.branches
            .lock()
            .unwrap()
            .retain(|branch| branch.name != name);
        Ok(())
    }

    async fn create_pull_request(
        &self,
        head: &str,
        base: &str,
        issue_number: Option<u64>,
        title: &str,
    ) -> Result<CreatedPullRequest, GitHubError> {
        self.record(GatewayCall::CreatePullRequest {
            head: head.to_string(),
            base: base.to_string(),
            issue_number,
            title: title.to_string(),
        });
        self.simulate_latency().await;
        if self.fail.lock().unwrap().create_pull_request {
            return Err(Self::scripted_failure());
        }
        let number = self.next_number.fetch_add(1, Ordering::SeqCst);
        Ok(CreatedPullRequest {
            id: 2000 + number,
            number,
        })
    }

    async fn merge_pull_request(
        &self,
        number: u64,
        commit_title: &str,
        commit_message: &str,
    ) -> Result<(), GitHubError> {
        self.record(GatewayCall::MergePullRequest {
            number,
            commit_title: commit_title.to_string(),
            commit_message: commit_message.to_string(),
        });
        self.simulate_latency().await;
        if self.fail.lock().unwrap().merge_pull_request {
            return Err(Self::scripted_failure());
        }
        Ok(())
    }
}
