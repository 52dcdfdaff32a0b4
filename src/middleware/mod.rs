pub mod company_request;
