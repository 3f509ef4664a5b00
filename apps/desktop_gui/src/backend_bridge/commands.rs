//! Backend commands queued from UI to backend worker.

use shared::{domain::TreeId, protocol::TreeFields};

pub enum BackendCommand {
    RefreshList,
    CreateTree { fields: TreeFields },
    UpdateTree { fields: TreeFields, id: TreeId },
    DeleteTree { id: TreeId },
}
