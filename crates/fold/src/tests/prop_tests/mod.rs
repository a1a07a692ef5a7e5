mod arithmetic_ops;
