pub struct FcmPushServiceConfig {
    pub project_id: String,
}
