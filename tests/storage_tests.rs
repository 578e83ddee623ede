use tresor_portal::storage::{
    ALL_BUCKETS, MockStorageService, S3StorageClient, StorageService, object_key, public_url,
    sanitize_filename,
};

#[cfg(test)]
mod key_tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\admin\\photo.png"), "photo.png");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(
            sanitize_filename("Rapport annuel 2024 (final).pdf"),
            "Rapport-annuel-2024--final-.pdf"
        );
        assert_eq!(sanitize_filename("élève.jpg"), "l-ve.jpg");
    }

    #[test]
    fn test_sanitize_never_empty() {
        assert_eq!(sanitize_filename(""), "fichier");
        assert_eq!(sanitize_filename("..."), "fichier");
        assert_eq!(sanitize_filename("dossier/"), "fichier");
    }

    #[test]
    fn test_object_key_is_time_prefixed() {
        let key = object_key("../organigramme 2025.png", 1_726_531_200_000);
        assert_eq!(key, "1726531200000-organigramme-2025.png");
    }

    #[test]
    fn test_public_url_joins_segments() {
        assert_eq!(
            public_url("https://cdn.example/storage/", "report-pdfs", "1-a.pdf"),
            "https://cdn.example/storage/report-pdfs/1-a.pdf"
        );
    }

    #[test]
    fn test_bucket_names_are_distinct() {
        let mut names = ALL_BUCKETS.to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ALL_BUCKETS.len());
    }
}

#[cfg(test)]
mod mock_tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_success() {
        let mock = MockStorageService::new();
        let result = mock
            .upload("hero-images", "1-slide.png", vec![1, 2, 3], "image/png")
            .await;
        assert!(result.is_ok());

        let url = result.unwrap();
        assert!(url.ends_with("/hero-images/1-slide.png"));

        let uploads = mock.uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].size, 3);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let mock = MockStorageService::new_failing();
        let result = mock
            .upload("hero-images", "1-slide.png", vec![1], "image/png")
            .await;
        assert!(result.is_err());
        assert!(mock.uploads().is_empty());
    }
}

#[cfg(test)]
mod s3_tests {
    use super::*;

    #[tokio::test]
    async fn test_s3_client_public_url() {
        let client = S3StorageClient::new(
            "http://localhost:9000",
            "us-east-1",
            "admin",
            "password",
            "http://localhost:9000",
        );

        assert_eq!(
            client.public_url("article-images", "1-a.png"),
            "http://localhost:9000/article-images/1-a.png"
        );
    }
}
