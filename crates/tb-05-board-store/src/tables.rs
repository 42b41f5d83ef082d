//! Table state and the synchronous operations on it.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use shared_types::{
    Comment, CommentId, Membership, Role, StoreError, Subtask, SubtaskDraft, SubtaskId,
    SubtaskPatch, Task, TaskDraft, TaskId, TaskStatus, UserId, Workspace, WorkspaceDraft,
    WorkspaceId,
};

#[derive(Debug, Default)]
pub(crate) struct Tables {
    next_id: u64,
    workspaces: BTreeMap<WorkspaceId, Workspace>,
    roles: BTreeMap<(WorkspaceId, UserId), Membership>,
    tasks: BTreeMap<TaskId, Task>,
    subtasks: BTreeMap<SubtaskId, Subtask>,
    comments: BTreeMap<CommentId, Comment>,
    watches: BTreeSet<(TaskId, UserId)>,
}

impl Tables {
    /// Ids are shared across record kinds and never reused.
    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    // ----- roles -----

    pub fn role(&self, user: UserId, workspace: WorkspaceId) -> Role {
        self.roles
            .get(&(workspace, user))
            .map(|m| m.role)
            .unwrap_or_default()
    }

    pub fn members(&self, workspace: WorkspaceId) -> Vec<Membership> {
        self.roles
            .range((workspace, UserId(0))..=(workspace, UserId(u64::MAX)))
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn member_ids(&self, workspace: WorkspaceId) -> Vec<UserId> {
        self.members(workspace).into_iter().map(|m| m.user_id).collect()
    }

    pub fn workspaces_of(&self, user: UserId) -> Vec<WorkspaceId> {
        self.roles
            .keys()
            .filter(|(_, u)| *u == user)
            .map(|(w, _)| *w)
            .collect()
    }

    pub fn add_member(
        &mut self,
        workspace: WorkspaceId,
        user: UserId,
        role: Role,
    ) -> Result<Membership, StoreError> {
        self.workspace(workspace)?;
        if !role.is_member() {
            return Err(StoreError::Constraint(format!("cannot grant role {}", role)));
        }
        if self.roles.contains_key(&(workspace, user)) {
            return Err(StoreError::Duplicate(format!(
                "role for user {} in workspace {}",
                user, workspace
            )));
        }
        let now = Utc::now();
        let membership = Membership {
            user_id: user,
            workspace_id: workspace,
            role,
            created_at: now,
            updated_at: now,
        };
        self.roles.insert((workspace, user), membership.clone());
        Ok(membership)
    }

    pub fn set_member_role(
        &mut self,
        workspace: WorkspaceId,
        user: UserId,
        role: Role,
    ) -> Result<Membership, StoreError> {
        if !role.is_member() {
            return Err(StoreError::Constraint(format!("cannot grant role {}", role)));
        }
        let membership = self
            .roles
            .get_mut(&(workspace, user))
            .ok_or_else(|| StoreError::not_found("member", user.get()))?;
        membership.role = role;
        membership.updated_at = Utc::now();
        Ok(membership.clone())
    }

    pub fn remove_member(&mut self, workspace: WorkspaceId, user: UserId) -> Result<(), StoreError> {
        self.roles
            .remove(&(workspace, user))
            .ok_or_else(|| StoreError::not_found("member", user.get()))?;
        Ok(())
    }

    // ----- users -----

    /// Drop every row that references `user`: roles, tasks assigned to them
    /// (with everything hanging off those tasks), subtasks assigned to them,
    /// their comments and their watches. Unknown users are a no-op.
    pub fn delete_user(&mut self, user: UserId) {
        self.roles.retain(|(_, u), _| *u != user);
        let assigned: Vec<TaskId> = self
            .tasks
            .values()
            .filter(|t| t.assignee_id == user)
            .map(|t| t.id)
            .collect();
        for task in assigned {
            self.remove_task_rows(task);
        }
        self.subtasks.retain(|_, s| s.assignee_id != user);
        self.comments.retain(|_, c| c.user_id != user);
        self.watches.retain(|(_, watcher)| *watcher != user);
    }

    // ----- workspaces -----

    pub fn workspace(&self, workspace: WorkspaceId) -> Result<&Workspace, StoreError> {
        self.workspaces
            .get(&workspace)
            .ok_or_else(|| StoreError::not_found("workspace", workspace.get()))
    }

    fn ensure_unique_workspace_name(
        &self,
        name: &str,
        except: Option<WorkspaceId>,
    ) -> Result<(), StoreError> {
        let taken = self
            .workspaces
            .values()
            .any(|w| w.name == name && Some(w.id) != except);
        if taken {
            return Err(StoreError::Duplicate(format!("workspace name '{}'", name)));
        }
        Ok(())
    }

    pub fn workspaces_for(&self, user: UserId) -> Vec<Workspace> {
        self.workspaces_of(user)
            .into_iter()
            .filter_map(|id| self.workspaces.get(&id).cloned())
            .collect()
    }

    pub fn create_workspace(
        &mut self,
        owner: UserId,
        draft: WorkspaceDraft,
    ) -> Result<Workspace, StoreError> {
        self.ensure_unique_workspace_name(&draft.name, None)?;
        let now = Utc::now();
        let workspace = Workspace {
            id: WorkspaceId(self.allocate()),
            name: draft.name,
            description: draft.description,
            created_at: now,
            updated_at: now,
        };
        self.workspaces.insert(workspace.id, workspace.clone());
        self.add_member(workspace.id, owner, Role::Owner)?;
        Ok(workspace)
    }

    pub fn update_workspace(
        &mut self,
        workspace: WorkspaceId,
        draft: WorkspaceDraft,
    ) -> Result<Workspace, StoreError> {
        self.workspace(workspace)?;
        self.ensure_unique_workspace_name(&draft.name, Some(workspace))?;
        let record = self
            .workspaces
            .get_mut(&workspace)
            .ok_or_else(|| StoreError::not_found("workspace", workspace.get()))?;
        record.name = draft.name;
        record.description = draft.description;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    pub fn delete_workspace(&mut self, workspace: WorkspaceId) -> Result<(), StoreError> {
        self.workspaces
            .remove(&workspace)
            .ok_or_else(|| StoreError::not_found("workspace", workspace.get()))?;
        let tasks: Vec<TaskId> = self.task_ids_in(workspace).collect();
        for task in tasks {
            self.remove_task_rows(task);
        }
        self.roles.retain(|(w, _), _| *w != workspace);
        Ok(())
    }

    // ----- tasks -----

    fn task_ids_in(&self, workspace: WorkspaceId) -> impl Iterator<Item = TaskId> + '_ {
        self.tasks
            .values()
            .filter(move |t| t.workspace_id == workspace)
            .map(|t| t.id)
    }

    pub fn task(&self, task: TaskId) -> Result<&Task, StoreError> {
        self.tasks
            .get(&task)
            .ok_or_else(|| StoreError::not_found("task", task.get()))
    }

    pub fn tasks_in(&self, workspace: WorkspaceId) -> Vec<Task> {
        self.tasks
            .values()
            .filter(|t| t.workspace_id == workspace)
            .cloned()
            .collect()
    }

    pub fn tasks_assigned_to(&self, user: UserId) -> Vec<Task> {
        self.tasks
            .values()
            .filter(|t| t.assignee_id == user)
            .cloned()
            .collect()
    }

    fn ensure_unique_task_title(
        &self,
        workspace: WorkspaceId,
        title: &str,
        except: Option<TaskId>,
    ) -> Result<(), StoreError> {
        let taken = self
            .tasks
            .values()
            .any(|t| t.workspace_id == workspace && t.title == title && Some(t.id) != except);
        if taken {
            return Err(StoreError::Duplicate(format!("task title '{}'", title)));
        }
        Ok(())
    }

    pub fn create_task(
        &mut self,
        workspace: WorkspaceId,
        draft: TaskDraft,
    ) -> Result<Task, StoreError> {
        self.workspace(workspace)?;
        self.ensure_unique_task_title(workspace, &draft.title, None)?;
        let now = Utc::now();
        let task = Task {
            id: TaskId(self.allocate()),
            title: draft.title,
            description: draft.description,
            status: TaskStatus::Planned,
            estimated_time: draft.estimated_time,
            actual_time: draft.actual_time,
            due_date: draft.due_date,
            priority: draft.priority,
            workspace_id: workspace,
            assignee_id: draft.assignee_id,
            created_at: now,
            updated_at: now,
        };
        self.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    pub fn update_task(&mut self, task: TaskId, draft: TaskDraft) -> Result<Task, StoreError> {
        let workspace = self.task(task)?.workspace_id;
        self.ensure_unique_task_title(workspace, &draft.title, Some(task))?;
        let record = self
            .tasks
            .get_mut(&task)
            .ok_or_else(|| StoreError::not_found("task", task.get()))?;
        record.title = draft.title;
        record.description = draft.description;
        record.estimated_time = draft.estimated_time;
        record.actual_time = draft.actual_time;
        record.due_date = draft.due_date;
        record.priority = draft.priority;
        record.assignee_id = draft.assignee_id;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    pub fn set_task_status(&mut self, task: TaskId, status: TaskStatus) -> Result<Task, StoreError> {
        let record = self
            .tasks
            .get_mut(&task)
            .ok_or_else(|| StoreError::not_found("task", task.get()))?;
        record.status = status;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    pub fn delete_task(&mut self, task: TaskId) -> Result<(), StoreError> {
        self.task(task)?;
        self.remove_task_rows(task);
        Ok(())
    }

    fn remove_task_rows(&mut self, task: TaskId) {
        self.tasks.remove(&task);
        self.subtasks.retain(|_, s| s.task_id != task);
        self.comments.retain(|_, c| c.task_id != task);
        self.watches.retain(|(t, _)| *t != task);
    }

    // ----- subtasks -----

    pub fn subtasks_of(&self, task: TaskId) -> Result<Vec<Subtask>, StoreError> {
        self.task(task)?;
        Ok(self
            .subtasks
            .values()
            .filter(|s| s.task_id == task)
            .cloned()
            .collect())
    }

    pub fn subtask(&self, task: TaskId, subtask: SubtaskId) -> Result<&Subtask, StoreError> {
        self.subtasks
            .get(&subtask)
            .filter(|s| s.task_id == task)
            .ok_or_else(|| StoreError::not_found("subtask", subtask.get()))
    }

    fn ensure_unique_subtask_title(
        &self,
        task: TaskId,
        title: &str,
        except: Option<SubtaskId>,
    ) -> Result<(), StoreError> {
        let taken = self
            .subtasks
            .values()
            .any(|s| s.task_id == task && s.title == title && Some(s.id) != except);
        if taken {
            return Err(StoreError::Duplicate(format!("subtask title '{}'", title)));
        }
        Ok(())
    }

    pub fn create_subtask(
        &mut self,
        task: TaskId,
        draft: SubtaskDraft,
    ) -> Result<Subtask, StoreError> {
        self.task(task)?;
        self.ensure_unique_subtask_title(task, &draft.title, None)?;
        let now = Utc::now();
        let subtask = Subtask {
            id: SubtaskId(self.allocate()),
            task_id: task,
            title: draft.title,
            is_completed: false,
            assignee_id: draft.assignee_id,
            created_at: now,
            updated_at: now,
        };
        self.subtasks.insert(subtask.id, subtask.clone());
        Ok(subtask)
    }

    pub fn update_subtask(
        &mut self,
        task: TaskId,
        subtask: SubtaskId,
        patch: SubtaskPatch,
    ) -> Result<Subtask, StoreError> {
        self.subtask(task, subtask)?;
        if let Some(title) = &patch.title {
            self.ensure_unique_subtask_title(task, title, Some(subtask))?;
        }
        let record = self
            .subtasks
            .get_mut(&subtask)
            .ok_or_else(|| StoreError::not_found("subtask", subtask.get()))?;
        if let Some(title) = patch.title {
            record.title = title;
        }
        if let Some(done) = patch.is_completed {
            record.is_completed = done;
        }
        if let Some(assignee) = patch.assignee_id {
            record.assignee_id = assignee;
        }
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    pub fn delete_subtask(&mut self, task: TaskId, subtask: SubtaskId) -> Result<(), StoreError> {
        self.subtask(task, subtask)?;
        self.subtasks.remove(&subtask);
        Ok(())
    }

    // ----- comments and watches -----

    pub fn comments_of(&self, task: TaskId) -> Result<Vec<Comment>, StoreError> {
        self.task(task)?;
        Ok(self
            .comments
            .values()
            .filter(|c| c.task_id == task)
            .cloned()
            .collect())
    }

    pub fn add_comment(
        &mut self,
        task: TaskId,
        author: UserId,
        text: String,
    ) -> Result<Comment, StoreError> {
        self.task(task)?;
        let comment = Comment {
            id: CommentId(self.allocate()),
            task_id: task,
            user_id: author,
            text,
        };
        self.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    pub fn is_watching(&self, task: TaskId, user: UserId) -> bool {
        self.watches.contains(&(task, user))
    }

    pub fn watch(&mut self, task: TaskId, user: UserId) -> Result<(), StoreError> {
        self.task(task)?;
        self.watches.insert((task, user));
        Ok(())
    }

    pub fn unwatch(&mut self, task: TaskId, user: UserId) -> Result<(), StoreError> {
        self.task(task)?;
        self.watches.remove(&(task, user));
        Ok(())
    }

    pub fn watchers(&self, task: TaskId) -> Vec<UserId> {
        self.watches
            .iter()
            .filter(|(t, _)| *t == task)
            .map(|(_, u)| *u)
            .collect()
    }

    /// Every user sharing at least one workspace with `user`, `user`
    /// included when they hold any role.
    pub fn associates_of(&self, user: UserId) -> Vec<UserId> {
        let shared: BTreeSet<UserId> = self
            .workspaces_of(user)
            .into_iter()
            .flat_map(|w| self.member_ids(w))
            .collect();
        shared.into_iter().collect()
    }
}
